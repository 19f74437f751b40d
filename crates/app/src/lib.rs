//! # saferoute-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement (driven/outbound port):
//!   - `LocationRepository` — find, list with projection, insert, append point
//! - Define the **driving/inbound** use-cases:
//!   - `LocationService` — list, get, create, add point, seed
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `saferoute-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
