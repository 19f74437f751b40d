//! # saferoute-adapter-storage-sqlite-sqlx
//!
//! `SQLite` document store using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `saferoute-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Store each location as one JSON document and map it back to domain types
//!
//! ## Dependency rule
//! Depends on `saferoute-app` (for port traits) and `saferoute-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod location_repo;
mod pool;

pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
