//! `SQLite` implementation of [`LocationRepository`].
//!
//! Each location is one row holding the full JSON document. Lookups go
//! through the indexed `id` column; when duplicates exist (see the seeding
//! race) the oldest row wins.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use saferoute_app::ports::LocationRepository;
use saferoute_domain::coordinate::Coordinate;
use saferoute_domain::error::SafeRouteError;
use saferoute_domain::id::LocationId;
use saferoute_domain::location::{Location, LocationSummary, Point};

use crate::error::StorageError;

/// Wrapper for converting a stored document into a domain [`Location`].
struct Document(Location);

impl Document {
    fn maybe(value: Option<Self>) -> Option<Location> {
        value.map(|d| d.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Document {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let document: String = row.try_get("document")?;
        let location =
            serde_json::from_str(&document).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        Ok(Self(location))
    }
}

/// Wrapper for converting a projected row into a [`LocationSummary`].
struct Summary(LocationSummary);

impl<'r> FromRow<'r, SqliteRow> for Summary {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let center: String = row.try_get("c")?;
        let radius: f64 = row.try_get("r")?;

        let center: Coordinate =
            serde_json::from_str(&center).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(LocationSummary {
            id: LocationId::new(id),
            center,
            radius,
        }))
    }
}

const INSERT: &str = "INSERT INTO locations (id, document) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT document FROM locations WHERE id = ? ORDER BY seq LIMIT 1";
const SELECT_SUMMARIES: &str = "SELECT id, json_extract(document, '$.c') AS c, CAST(json_extract(document, '$.r') AS REAL) AS r FROM locations ORDER BY seq";
const PUSH_POINT: &str = "UPDATE locations \
    SET document = json_set(document, '$.p', json_insert(COALESCE(json_extract(document, '$.p'), '[]'), '$[#]', json(?))) \
    WHERE seq = (SELECT seq FROM locations WHERE id = ? ORDER BY seq LIMIT 1) \
    RETURNING document";

/// `SQLite`-backed location document store.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    fn find_by_id(
        &self,
        id: &LocationId,
    ) -> impl Future<Output = Result<Option<Location>, SafeRouteError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let row: Option<Document> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Document::maybe(row))
        }
    }

    fn list_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<LocationSummary>, SafeRouteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Summary> = sqlx::query_as(SELECT_SUMMARIES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|s| s.0).collect())
        }
    }

    fn insert(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, SafeRouteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let document = serde_json::to_string(&location).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(location.id.as_str())
                .bind(document)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(location)
        }
    }

    fn push_point(
        &self,
        id: &LocationId,
        point: Point,
    ) -> impl Future<Output = Result<Option<Location>, SafeRouteError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let point = serde_json::to_string(&point).map_err(StorageError::from)?;
            let row: Option<Document> = sqlx::query_as(PUSH_POINT)
                .bind(point)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Document::maybe(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use saferoute_domain::location::Exit;

    async fn setup() -> SqliteLocationRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteLocationRepository::new(db.pool().clone())
    }

    fn test_location(id: &str) -> Location {
        Location::builder()
            .id(id)
            .tag("g")
            .center(Coordinate::new(-0.0994, 51.5808))
            .radius(5.0)
            .build()
            .unwrap()
    }

    fn test_point(id: &str) -> Point {
        Point::builder()
            .id(id)
            .location(Coordinate::new(-0.1032, 51.5904))
            .exit(Exit::new("A", Coordinate::new(-0.0906, 51.5898)))
            .caution("Steep steps")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_location_when_valid() {
        let repo = setup().await;
        let location = test_location("green1");

        repo.insert(location.clone()).await.unwrap();

        let fetched = repo
            .find_by_id(&LocationId::new("green1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, location);
    }

    #[tokio::test]
    async fn should_return_none_when_location_not_found() {
        let repo = setup().await;
        let result = repo.find_by_id(&LocationId::new("missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_summaries_in_insertion_order() {
        let repo = setup().await;
        repo.insert(test_location("a")).await.unwrap();
        repo.insert(test_location("b")).await.unwrap();

        let all = repo.list_summaries().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(all[0], test_location("a").summary());
    }

    #[tokio::test]
    async fn should_append_point_to_end_of_list() {
        let repo = setup().await;
        let id = LocationId::new("x");
        repo.insert(test_location("x")).await.unwrap();

        repo.push_point(&id, test_point("p1")).await.unwrap();
        let updated = repo
            .push_point(&id, test_point("p2"))
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<&str> = updated.points.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert_eq!(updated.points[0], test_point("p1"));
    }

    #[tokio::test]
    async fn should_return_none_when_pushing_to_missing_location() {
        let repo = setup().await;
        let result = repo
            .push_point(&LocationId::new("missing"), test_point("p1"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_update_only_oldest_duplicate_when_ids_collide() {
        let repo = setup().await;
        let id = LocationId::new("dup");
        repo.insert(test_location("dup")).await.unwrap();
        repo.insert(test_location("dup")).await.unwrap();

        repo.push_point(&id, test_point("p1")).await.unwrap();

        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT document FROM locations WHERE id = 'dup' ORDER BY seq")
                .fetch_all(&repo.pool)
                .await
                .unwrap();
        let counts: Vec<usize> = rows
            .iter()
            .map(|(doc,)| serde_json::from_str::<Location>(doc).unwrap().points.len())
            .collect();
        assert_eq!(counts, [1, 0]);
    }
}
