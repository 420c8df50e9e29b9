//! Port abstraction for read-only earthquake lookups.

use async_trait::async_trait;

use crate::domain::{DisasterId, Earthquake, Error};

/// Persistence errors raised by earthquake repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EarthquakeStoreError {
    /// Repository connection could not be established.
    #[error("earthquake repository connection failed: {message}")]
    Connection { message: String },
    /// Query failed during execution.
    #[error("earthquake repository query failed: {message}")]
    Query { message: String },
}

impl EarthquakeStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<EarthquakeStoreError> for Error {
    fn from(error: EarthquakeStoreError) -> Self {
        match error {
            EarthquakeStoreError::Connection { message } => Error::service_unavailable(message),
            EarthquakeStoreError::Query { message } => Error::internal(message),
        }
    }
}

/// Read-only repository port for earthquake records. No mutation path
/// exists anywhere in the application.
#[async_trait]
pub trait EarthquakeRepository: Send + Sync {
    /// List every recorded earthquake, newest first.
    async fn list(&self) -> Result<Vec<Earthquake>, EarthquakeStoreError>;

    /// Fetch one earthquake by its disaster identifier.
    async fn find_by_id(&self, id: DisasterId)
        -> Result<Option<Earthquake>, EarthquakeStoreError>;
}
