//! PostgreSQL-backed `EarthquakeRepository` implementation using Diesel.
//!
//! Earthquake reads join the specialisation table to the disaster base
//! table and flatten the pair into one domain record. Strictly read-only.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EarthquakeRepository, EarthquakeStoreError};
use crate::domain::{DisasterId, Earthquake};

use super::models::{join_to_earthquake, EarthquakeRow, NaturalDisasterRow};
use super::pool::{DbPool, PoolError};
use super::schema::{earthquakes, natural_disasters};

/// Diesel-backed implementation of the `EarthquakeRepository` port.
#[derive(Clone)]
pub struct DieselEarthquakeRepository {
    pool: DbPool,
}

impl DieselEarthquakeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EarthquakeStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EarthquakeStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EarthquakeStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EarthquakeStoreError::connection("database connection error")
        }
        _ => EarthquakeStoreError::query("database error"),
    }
}

#[async_trait]
impl EarthquakeRepository for DieselEarthquakeRepository {
    async fn list(&self) -> Result<Vec<Earthquake>, EarthquakeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(EarthquakeRow, NaturalDisasterRow)> = earthquakes::table
            .inner_join(natural_disasters::table)
            .order(natural_disasters::occurred_at.desc())
            .select((
                EarthquakeRow::as_select(),
                NaturalDisasterRow::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(quake, base)| join_to_earthquake(quake, base))
            .collect())
    }

    async fn find_by_id(
        &self,
        id: DisasterId,
    ) -> Result<Option<Earthquake>, EarthquakeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(EarthquakeRow, NaturalDisasterRow)> = earthquakes::table
            .inner_join(natural_disasters::table)
            .filter(earthquakes::nat_id.eq(id.as_i32()))
            .select((
                EarthquakeRow::as_select(),
                NaturalDisasterRow::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(quake, base)| join_to_earthquake(quake, base)))
    }
}

#[cfg(test)]
mod tests {
    //! Error-mapping coverage; live queries are exercised against a real
    //! database out of band.
    use super::*;
    use diesel::result::Error as DieselError;

    #[test]
    fn query_failures_map_to_query_error() {
        assert!(matches!(
            map_diesel_error(DieselError::NotFound),
            EarthquakeStoreError::Query { .. }
        ));
    }

    #[test]
    fn pool_errors_map_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, EarthquakeStoreError::connection("timed out"));
    }
}
