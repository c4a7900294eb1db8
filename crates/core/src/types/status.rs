//! Status enums shared across the marketplace.
//!
//! Each enum has exactly one canonical wire form (snake_case). The source
//! system drifted between "Delivered" and "delivered" in different handler
//! copies; here every producer and consumer goes through these types, so
//! there is nothing to drift.

use serde::{Deserialize, Serialize};

/// A user's role in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Default role for every new account.
    #[default]
    Customer,
    /// May list plants for sale.
    Seller,
    /// May manage other users.
    Admin,
}

/// Pending state of the two-phase seller upgrade.
///
/// A customer requests the upgrade (`None` -> `Requested`); an admin action
/// later promotes the role and resets this back to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "upgrade_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    /// No upgrade request outstanding.
    #[default]
    None,
    /// Upgrade requested, awaiting admin approval.
    Requested,
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "order_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet handled by the seller.
    #[default]
    Pending,
    /// Accepted by the seller, in fulfilment.
    Processing,
    /// Delivered to the customer. Delivered orders cannot be cancelled.
    Delivered,
}

/// Direction of a signed stock adjustment.
///
/// The quantity endpoint takes the delta as a positive number and this
/// direction flag, mirroring the original clients' wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdjustDirection {
    /// Subtract the delta from stock (the default, used at checkout).
    #[default]
    Decrease,
    /// Add the delta to stock (restock, cancelled order).
    Increase,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Customer => "customer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
        assert_eq!(
            serde_json::to_string(&UpgradeStatus::Requested).unwrap(),
            "\"requested\""
        );
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
    }

    #[test]
    fn mixed_case_sentinels_are_rejected() {
        // One canonical casing; the drifted "Delivered" form does not parse.
        assert!(serde_json::from_str::<OrderStatus>("\"Delivered\"").is_err());
        assert!(serde_json::from_str::<OrderStatus>("\"delivered\"").is_ok());
    }

    #[test]
    fn adjust_direction_defaults_to_decrease() {
        assert_eq!(AdjustDirection::default(), AdjustDirection::Decrease);
        let parsed: AdjustDirection = serde_json::from_str("\"increase\"").unwrap();
        assert_eq!(parsed, AdjustDirection::Increase);
    }

    #[test]
    fn role_from_str_round_trips() {
        for role in [Role::Customer, Role::Seller, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("gardener".parse::<Role>().is_err());
    }
}
