//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::{get, post};

use saferoute_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/locations", get(locations::list::<R>))
        .route("/location", post(locations::create::<R>))
        .route(
            "/location/{id}",
            get(locations::get::<R>).post(locations::add_point::<R>),
        )
}
