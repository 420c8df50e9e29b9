//! PostgreSQL persistence adapters built on Diesel.
//!
//! The adapters here implement the repository ports from
//! [`crate::domain::ports`] against the schema in [`schema`], using the
//! async connection pool in [`pool`]. SQL migrations are embedded into the
//! binary and applied at startup via [`run_migrations`].

mod diesel_contact_repository;
mod diesel_earthquake_repository;
mod diesel_user_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_earthquake_repository::DieselEarthquakeRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

/// Migrations compiled into the binary from `backend/migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Run(String),
}

/// Apply all pending migrations over a dedicated synchronous connection.
///
/// Runs once at startup, before the async pool is built; Diesel's
/// migration harness is synchronous, so callers on an async runtime should
/// wrap this in a blocking task.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Run(err.to_string()))?;
    Ok(())
}
