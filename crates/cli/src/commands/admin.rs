//! Admin user-management commands.

use plantnet_core::Role;

use super::{CommandError, connect};

/// Promote a user to the given role and clear any pending upgrade request.
///
/// This is the approval side of the two-phase seller upgrade: the API only
/// ever sets `status = 'requested'`; role changes happen here.
///
/// # Errors
///
/// Returns `CommandError::Invalid` for an unknown role or email, or a
/// database error.
pub async fn promote(email: &str, role: &str) -> Result<(), CommandError> {
    let role: Role = role.parse().map_err(CommandError::Invalid)?;
    if role == Role::Customer {
        return Err(CommandError::Invalid(
            "promotion target must be seller or admin".to_owned(),
        ));
    }

    let pool = connect().await?;

    let result = sqlx::query("UPDATE users SET role = $2, status = 'none' WHERE email = $1")
        .bind(email)
        .bind(role)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CommandError::Invalid(format!("no user with email {email}")));
    }

    tracing::info!("promoted {email} to {role}");
    Ok(())
}
