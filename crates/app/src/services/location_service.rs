//! Location service — use-cases for reading and growing locations.

use saferoute_domain::error::{ConflictError, NotFoundError, SafeRouteError};
use saferoute_domain::id::LocationId;
use saferoute_domain::location::{Location, LocationSummary, Point};
use saferoute_domain::seed;

use crate::ports::LocationRepository;

/// Result of [`LocationService::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The seed location was written.
    Inserted,
    /// A location with the sentinel id was already stored.
    AlreadyPresent,
}

/// Application service for location operations.
pub struct LocationService<R> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every location, projected to `{id, c, r}`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_locations(&self) -> Result<Vec<LocationSummary>, SafeRouteError> {
        self.repo.list_summaries().await
    }

    /// Look up a location by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::NotFound`] when no location with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_location(&self, id: &LocationId) -> Result<Location, SafeRouteError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new location after checking its shape and that its id is free.
    ///
    /// The existence check and the insert are two separate store calls, so two
    /// concurrent creates with the same id can both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] if the shape check fails,
    /// [`SafeRouteError::Conflict`] if the id is taken, or a storage error.
    #[tracing::instrument(skip(self, location), fields(location_id = %location.id))]
    pub async fn create_location(&self, location: Location) -> Result<Location, SafeRouteError> {
        location.validate()?;
        if self.repo.find_by_id(&location.id).await?.is_some() {
            return Err(ConflictError {
                entity: "Location",
                id: location.id.to_string(),
            }
            .into());
        }
        self.repo.insert(location).await
    }

    /// Append a point to the end of a location's point list.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Validation`] if the shape check fails,
    /// [`SafeRouteError::NotFound`] if no location matches, or a storage error.
    #[tracing::instrument(skip(self, point), fields(point_id = %point.id))]
    pub async fn add_point(
        &self,
        id: &LocationId,
        point: Point,
    ) -> Result<Location, SafeRouteError> {
        point.validate()?;
        self.repo
            .push_point(id, point)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Insert the seed location unless one with the sentinel id exists.
    ///
    /// Check-then-insert: two instances starting against the same empty store
    /// at the same moment may both insert.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn seed(&self) -> Result<SeedOutcome, SafeRouteError> {
        let sentinel = LocationId::new(seed::SENTINEL_ID);
        if self.repo.find_by_id(&sentinel).await?.is_some() {
            tracing::info!(id = %sentinel, "seed data already exists");
            return Ok(SeedOutcome::AlreadyPresent);
        }
        self.repo.insert(seed::green_zone()?).await?;
        tracing::info!(id = %sentinel, "seed data saved");
        Ok(SeedOutcome::Inserted)
    }
}

fn not_found(id: &LocationId) -> SafeRouteError {
    NotFoundError {
        entity: "Location",
        id: id.to_string(),
    }
    .into()
}
