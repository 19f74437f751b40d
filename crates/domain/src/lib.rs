//! # saferoute-domain
//!
//! Pure domain model for the saferoute location service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, coordinates
//! - Define **Locations** (zones with a center, a radius, and ordered points)
//! - Define **Points** (waypoints inside a location, each with an exit and a caution)
//! - Define **Exits** (named egress coordinates attached to a point)
//! - Provide the seed location inserted on first startup
//! - Contain all shape checks applied at the API boundary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod coordinate;
pub mod error;
pub mod id;

pub mod location;
pub mod seed;
