//! JSON REST handlers for locations and their points.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use saferoute_app::ports::LocationRepository;
use saferoute_domain::id::LocationId;
use saferoute_domain::location::{Location, LocationSummary, Point};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<LocationSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and add-point endpoints.
pub enum GetResponse {
    Ok(Json<Location>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Location>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/locations`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;
    Ok(ListResponse::Ok(Json(locations)))
}

/// `GET /api/location/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let location = state
        .location_service
        .get_location(&LocationId::new(id))
        .await?;
    Ok(GetResponse::Ok(Json(location)))
}

/// `POST /api/location`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<Location>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let Json(location) = body?;
    let created = state.location_service.create_location(location).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /api/location/:id`
pub async fn add_point<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<Point>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let Json(point) = body?;
    let updated = state
        .location_service
        .add_point(&LocationId::new(id), point)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}
