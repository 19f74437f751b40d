//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SafeRouteError`] via `#[from]`.

/// Top-level error returned by domain checks, services, and repositories.
#[derive(Debug, thiserror::Error)]
pub enum SafeRouteError {
    /// A payload failed a shape check.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup by id returned nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A create collided with an existing id.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Shape errors detected on incoming locations and points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("location 'id' must be a non-empty string")]
    EmptyLocationId,

    #[error("location 'r' must be a finite number")]
    InvalidRadius,

    #[error("point 'i' must be a non-empty string")]
    EmptyPointId,

    #[error("point 'caution' must be a non-empty string")]
    EmptyCaution,

    /// The body could not be decoded into the expected shape at all.
    #[error("invalid data format: {0}")]
    MalformedBody(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An insert would duplicate an existing identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} already exists: {id}")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message_with_entity_and_id() {
        let err = SafeRouteError::from(NotFoundError {
            entity: "Location",
            id: "green1".to_string(),
        });
        assert_eq!(err.to_string(), "Location not found: green1");
    }

    #[test]
    fn should_render_conflict_message_with_entity_and_id() {
        let err = SafeRouteError::from(ConflictError {
            entity: "Location",
            id: "x".to_string(),
        });
        assert_eq!(err.to_string(), "Location already exists: x");
    }

    #[test]
    fn should_prefix_validation_messages() {
        let err = SafeRouteError::from(ValidationError::EmptyCaution);
        assert_eq!(
            err.to_string(),
            "validation error: point 'caution' must be a non-empty string"
        );
    }
}
