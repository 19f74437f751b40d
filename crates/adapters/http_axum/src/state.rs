//! Shared application state for axum handlers.

use std::sync::Arc;

use saferoute_app::ports::LocationRepository;
use saferoute_app::services::location_service::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Location use-cases.
    pub location_service: Arc<LocationService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<R> AppState<R>
where
    R: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(location_service: LocationService<R>) -> Self {
        Self {
            location_service: Arc::new(location_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// e.g. for seeding at startup.
    pub fn from_arc(location_service: Arc<LocationService<R>>) -> Self {
        Self { location_service }
    }
}
