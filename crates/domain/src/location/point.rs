//! Point and exit — the embedded parts of a location.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{SafeRouteError, ValidationError};
use crate::id::PointId;

/// A named egress coordinate associated with a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "l")]
    pub location: Coordinate,
}

impl Exit {
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A waypoint inside a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "i")]
    pub id: PointId,
    #[serde(rename = "l")]
    pub location: Coordinate,
    #[serde(rename = "e")]
    pub exit: Exit,
    /// Free-text advisory shown alongside the point.
    pub caution: String,
}

impl Point {
    /// Create a builder for constructing a [`Point`].
    #[must_use]
    pub fn builder() -> PointBuilder {
        PointBuilder::default()
    }

    /// Check the shape of the point.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] when the id or the caution is
    /// empty. The exit is accepted as decoded.
    pub fn validate(&self) -> Result<(), SafeRouteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyPointId.into());
        }
        if self.caution.is_empty() {
            return Err(ValidationError::EmptyCaution.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Point`].
#[derive(Debug, Default)]
pub struct PointBuilder {
    id: Option<PointId>,
    location: Option<Coordinate>,
    exit: Option<Exit>,
    caution: Option<String>,
}

impl PointBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<PointId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn exit(mut self, exit: Exit) -> Self {
        self.exit = Some(exit);
        self
    }

    #[must_use]
    pub fn caution(mut self, caution: impl Into<String>) -> Self {
        self.caution = Some(caution.into());
        self
    }

    /// Consume the builder, validate, and return a [`Point`].
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] if the id or caution is missing
    /// or empty. A missing exit defaults to an unnamed exit at the point's
    /// location.
    pub fn build(self) -> Result<Point, SafeRouteError> {
        let location = self.location.unwrap_or(Coordinate(0.0, 0.0));
        let point = Point {
            id: self.id.unwrap_or_else(|| PointId::new("")),
            location,
            exit: self.exit.unwrap_or_else(|| Exit::new("", location)),
            caution: self.caution.unwrap_or_default(),
        };
        point.validate()?;
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit() -> Exit {
        Exit::new("A", Coordinate::new(-0.0906, 51.5898))
    }

    #[test]
    fn should_build_valid_point_when_all_fields_present() {
        let point = Point::builder()
            .id("r1")
            .location(Coordinate::new(-0.1032, 51.5904))
            .exit(exit())
            .caution("Narrow path")
            .build()
            .unwrap();
        assert_eq!(point.id.as_str(), "r1");
        assert_eq!(point.exit.name, "A");
    }

    #[test]
    fn should_return_validation_error_when_caution_missing() {
        let result = Point::builder().id("r1").exit(exit()).build();
        assert!(matches!(
            result,
            Err(SafeRouteError::Validation(ValidationError::EmptyCaution))
        ));
    }

    #[test]
    fn should_accept_exit_with_empty_name() {
        let point = Point::builder()
            .id("r9")
            .exit(Exit::new("", Coordinate::new(1.0, 1.0)))
            .caution("x")
            .build()
            .unwrap();
        assert!(point.exit.name.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_id_empty() {
        let result = Point::builder().id("").exit(exit()).caution("c").build();
        assert!(matches!(
            result,
            Err(SafeRouteError::Validation(ValidationError::EmptyPointId))
        ));
    }

    #[test]
    fn should_decode_point_from_short_wire_names() {
        let point: Point = serde_json::from_str(
            r#"{ "i": "r9", "l": [1, 2], "e": { "n": "Z", "l": [3, 4] }, "caution": "Ice" }"#,
        )
        .unwrap();
        assert_eq!(point.exit.location, Coordinate::new(3.0, 4.0));
        assert_eq!(point.caution, "Ice");
    }

    #[test]
    fn should_reject_point_without_caution_field() {
        let result = serde_json::from_str::<Point>(
            r#"{ "i": "r9", "l": [1, 2], "e": { "n": "Z", "l": [3, 4] } }"#,
        );
        assert!(result.is_err());
    }
}
