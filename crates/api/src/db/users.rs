//! User directory repository.

use sqlx::PgPool;

use plantnet_core::{Email, Role};

use super::{RepositoryError, bounded};
use crate::models::User;

const USER_COLUMNS: &str = "id, email, name, image, role, status, created_at";

/// Outcome of the idempotent ensure-user operation.
#[derive(Debug)]
pub enum EnsureOutcome {
    /// A fresh record was inserted.
    Created(User),
    /// A record for this email already existed; nothing was written.
    AlreadyExists,
}

/// Profile fields a client may supply on first contact.
#[derive(Debug, Default, Clone)]
pub struct NewProfile {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Repository for user directory operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user on first contact, or do nothing if the email is
    /// already known.
    ///
    /// Idempotence rides on the unique email index: `ON CONFLICT DO
    /// NOTHING` makes two concurrent calls insert exactly one row between
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn ensure(
        &self,
        email: &Email,
        profile: NewProfile,
    ) -> Result<EnsureOutcome, RepositoryError> {
        bounded(async {
            let inserted = sqlx::query_as::<_, User>(&format!(
                "INSERT INTO users (email, name, image)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (email) DO NOTHING
                 RETURNING {USER_COLUMNS}"
            ))
            .bind(email)
            .bind(profile.name)
            .bind(profile.image)
            .fetch_optional(self.pool)
            .await?;

            Ok(match inserted {
                Some(user) => EnsureOutcome::Created(user),
                None => EnsureOutcome::AlreadyExists,
            })
        })
        .await
    }

    /// Mark a user as having requested the seller upgrade.
    ///
    /// The precondition (record exists, no request outstanding) is part of
    /// the update filter, so two concurrent requests cannot both succeed.
    /// Returns whether the transition happened; `false` means the user is
    /// unknown or already in the requested state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn request_seller_upgrade(&self, email: &Email) -> Result<bool, RepositoryError> {
        bounded(async {
            let result = sqlx::query(
                "UPDATE users SET status = 'requested'
                 WHERE email = $1 AND status = 'none'",
            )
            .bind(email)
            .execute(self.pool)
            .await?;

            Ok(result.rows_affected() > 0)
        })
        .await
    }

    /// Look up a user's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn role_of(&self, email: &Email) -> Result<Option<Role>, RepositoryError> {
        bounded(async {
            let role = sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(self.pool)
                .await?;
            Ok(role)
        })
        .await
    }

    /// List every user except the given one (the admin "manage users" view
    /// excludes the admin themselves).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_others(&self, exclude: &Email) -> Result<Vec<User>, RepositoryError> {
        bounded(async {
            let users = sqlx::query_as::<_, User>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE email <> $1 ORDER BY created_at"
            ))
            .bind(exclude)
            .fetch_all(self.pool)
            .await?;
            Ok(users)
        })
        .await
    }
}
