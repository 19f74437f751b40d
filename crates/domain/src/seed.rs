//! Seed location inserted on first startup.
//!
//! | Point | Location | Exit |
//! |-------|----------|------|
//! | `r1` | `[-0.1032, 51.5904]` | `A` at `[-0.0906, 51.5898]` |
//! | `r2` | `[-0.0994, 51.5808]` | `B` at `[-0.1024, 51.5686]` |
//! | `r3` | `[-0.1101, 51.5863]` | `C` at `[-0.1359, 51.5820]` |

use crate::coordinate::Coordinate;
use crate::error::SafeRouteError;
use crate::location::{Exit, Location, Point};

/// Id whose presence marks the seed as already applied.
pub const SENTINEL_ID: &str = "green1";

/// Build the seed "green" zone.
///
/// # Errors
///
/// Returns [`SafeRouteError::Validation`] if a seed point or the seed
/// location fails validation.
pub fn green_zone() -> Result<Location, SafeRouteError> {
    Location::builder()
        .tag("g")
        .id(SENTINEL_ID)
        .center(Coordinate::new(-0.0994, 51.5808))
        .radius(5.0)
        .point(point(
            "r1",
            Coordinate::new(-0.1032, 51.5904),
            Exit::new("A", Coordinate::new(-0.0906, 51.5898)),
            "Uneven ground near the north gate",
        )?)
        .point(point(
            "r2",
            Coordinate::new(-0.0994, 51.5808),
            Exit::new("B", Coordinate::new(-0.1024, 51.5686)),
            "Busy crossing, use the lights",
        )?)
        .point(point(
            "r3",
            Coordinate::new(-0.1101, 51.5863),
            Exit::new("C", Coordinate::new(-0.1359, 51.5820)),
            "Poorly lit after dark",
        )?)
        .build()
}

fn point(
    id: &str,
    location: Coordinate,
    exit: Exit,
    caution: &str,
) -> Result<Point, SafeRouteError> {
    Point::builder()
        .id(id)
        .location(location)
        .exit(exit)
        .caution(caution)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_seed_with_sentinel_id_and_three_points() {
        let seed = green_zone().unwrap();
        assert_eq!(seed.id.as_str(), SENTINEL_ID);
        assert_eq!(seed.tag.as_deref(), Some("g"));
        let ids: Vec<&str> = seed.points.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[test]
    fn should_give_every_seed_point_an_exit_and_caution() {
        let seed = green_zone().unwrap();
        let exits: Vec<&str> = seed.points.iter().map(|p| p.exit.name.as_str()).collect();
        assert_eq!(exits, ["A", "B", "C"]);
        assert!(seed.points.iter().all(|p| !p.caution.is_empty()));
    }
}
