//! Database operations for the PlantNet `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - user directory (role, pending seller-upgrade status)
//! - `plants` - inventory with atomically adjusted stock
//! - `orders` - order ledger; `plant_id` is a soft reference with no
//!   foreign key, so the enrichment join must tolerate a deleted plant
//!
//! Single-row conditional updates stand in for application-level locking:
//! the seller-upgrade precondition and the stock floor check both live in
//! the SQL filter, never in a separate read.
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p plantnet-cli -- migrate
//! ```

pub mod orders;
pub mod plants;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use orders::OrderRepository;
pub use plants::PlantRepository;
pub use users::UserRepository;

/// Upper bound on any single store round-trip. Expiry surfaces as a 503
/// rather than hanging the request.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g. delivered order, duplicate request).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stock decrement would take the quantity below zero.
    #[error("insufficient stock")]
    InsufficientStock,

    /// The store did not answer within [`STORE_TIMEOUT`].
    #[error("store operation timed out")]
    Timeout,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Run a repository operation under the store-wide timeout.
pub(crate) async fn bounded<T>(
    fut: impl Future<Output = Result<T, RepositoryError>>,
) -> Result<T, RepositoryError> {
    match tokio::time::timeout(STORE_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => Err(RepositoryError::Timeout),
    }
}
