//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use saferoute_domain::error::{SafeRouteError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SafeRouteError`] to an HTTP response with appropriate status code.
pub struct ApiError(SafeRouteError);

impl From<SafeRouteError> for ApiError {
    fn from(err: SafeRouteError) -> Self {
        Self(err)
    }
}

/// Bodies that fail to decode are shape errors, reported in the same
/// `{ "error": … }` form as every other failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::MalformedBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SafeRouteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SafeRouteError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SafeRouteError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            SafeRouteError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
