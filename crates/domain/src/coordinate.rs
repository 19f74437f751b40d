//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair.
///
/// Serialized as a two-element JSON array. Any other length fails to
/// decode. No range check is applied to either component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self(lng, lat)
    }

    #[must_use]
    pub fn lng(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn lat(self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_two_element_array() {
        let json = serde_json::to_string(&Coordinate::new(-0.0994, 51.5808)).unwrap();
        assert_eq!(json, "[-0.0994,51.5808]");
    }

    #[test]
    fn should_reject_array_with_wrong_length() {
        assert!(serde_json::from_str::<Coordinate>("[1.0]").is_err());
        assert!(serde_json::from_str::<Coordinate>("[1.0, 2.0, 3.0]").is_err());
    }

    #[test]
    fn should_reject_non_array_value() {
        assert!(serde_json::from_str::<Coordinate>("\"1,2\"").is_err());
    }

    #[test]
    fn should_accept_integers_and_out_of_range_values() {
        let c: Coordinate = serde_json::from_str("[1, 200]").unwrap();
        assert_eq!(c, Coordinate::new(1.0, 200.0));
    }
}
