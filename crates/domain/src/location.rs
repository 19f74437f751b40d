//! Location — a geographic zone with a center, a radius, and ordered points.
//!
//! A [`Location`] is the root aggregate and the unit of storage. It owns its
//! [`Point`]s (and through them their [`Exit`]s) exclusively.

mod point;

pub use point::{Exit, Point, PointBuilder};

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{SafeRouteError, ValidationError};
use crate::id::LocationId;

/// A named zone holding an ordered list of points.
///
/// Wire names follow the stored document layout: `t`, `id`, `c`, `r`, `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Category tag (e.g. `"g"`). Never defaulted.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub id: LocationId,
    #[serde(rename = "c")]
    pub center: Coordinate,
    #[serde(rename = "r")]
    pub radius: f64,
    /// Points in insertion order. Absent on input means empty.
    #[serde(rename = "p", default)]
    pub points: Vec<Point>,
}

impl Location {
    /// Create a builder for constructing a [`Location`].
    #[must_use]
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }

    /// Check the shape of the aggregate.
    ///
    /// Embedded points are not re-checked here; they are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] when `id` is empty or `radius`
    /// is not a finite number.
    pub fn validate(&self) -> Result<(), SafeRouteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyLocationId.into());
        }
        if !self.radius.is_finite() {
            return Err(ValidationError::InvalidRadius.into());
        }
        Ok(())
    }

    /// Project the location down to its list-view fields.
    #[must_use]
    pub fn summary(&self) -> LocationSummary {
        LocationSummary {
            id: self.id.clone(),
            center: self.center,
            radius: self.radius,
        }
    }
}

/// The `{id, c, r}` projection returned when listing locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub id: LocationId,
    #[serde(rename = "c")]
    pub center: Coordinate,
    #[serde(rename = "r")]
    pub radius: f64,
}

/// Step-by-step builder for [`Location`].
#[derive(Debug, Default)]
pub struct LocationBuilder {
    tag: Option<String>,
    id: Option<LocationId>,
    center: Option<Coordinate>,
    radius: Option<f64>,
    points: Vec<Point>,
}

impl LocationBuilder {
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<LocationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn center(mut self, center: Coordinate) -> Self {
        self.center = Some(center);
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Append a point to the end of the list.
    #[must_use]
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Consume the builder, validate, and return a [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] if `id` is missing or empty, or
    /// if `radius` is missing or not finite.
    pub fn build(self) -> Result<Location, SafeRouteError> {
        let location = Location {
            tag: self.tag,
            id: self.id.unwrap_or_else(|| LocationId::new("")),
            center: self.center.unwrap_or(Coordinate(0.0, 0.0)),
            radius: self.radius.unwrap_or(f64::NAN),
            points: self.points,
        };
        location.validate()?;
        Ok(location)
    }
}
