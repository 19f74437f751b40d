//! Storage port — the document-store access pattern for locations.

use std::future::Future;

use saferoute_domain::error::SafeRouteError;
use saferoute_domain::id::LocationId;
use saferoute_domain::location::{Location, LocationSummary, Point};

/// Repository for persisting and querying [`Location`] documents.
pub trait LocationRepository {
    /// Get the first location whose `id` matches.
    fn find_by_id(
        &self,
        id: &LocationId,
    ) -> impl Future<Output = Result<Option<Location>, SafeRouteError>> + Send;

    /// Get the `{id, c, r}` projection of every stored location, in store order.
    fn list_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<LocationSummary>, SafeRouteError>> + Send;

    /// Store a new location document as given.
    ///
    /// Does not check for an existing document with the same id.
    fn insert(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, SafeRouteError>> + Send;

    /// Append `point` to the `p` list of the matching location.
    ///
    /// The append must be atomic per document: concurrent calls for the same
    /// id never lose an entry. Returns the updated document, or `None` when no
    /// location matches.
    fn push_point(
        &self,
        id: &LocationId,
        point: Point,
    ) -> impl Future<Output = Result<Option<Location>, SafeRouteError>> + Send;
}
