//! User directory types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use plantnet_core::{Email, Role, UpgradeStatus, UserId};

/// A marketplace user.
///
/// Created idempotently on first contact from an email; the role starts as
/// `customer` and is only escalated through the two-phase upgrade flow.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, the unique key of the directory.
    pub email: Email,
    /// Display name, if the client supplied one.
    pub name: Option<String>,
    /// Avatar URL, if the client supplied one.
    pub image: Option<String>,
    /// Marketplace role.
    pub role: Role,
    /// Pending seller-upgrade state.
    pub status: UpgradeStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
