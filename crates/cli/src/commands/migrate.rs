//! Database migration command.
//!
//! Applies the embedded migrations from `crates/api/migrations/`.

use super::{CommandError, connect};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a migration
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;
    tracing::info!("migrations complete");

    Ok(())
}
