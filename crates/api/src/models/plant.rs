//! Inventory types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use plantnet_core::{Email, PlantId};

/// A plant listing.
///
/// `quantity` is only ever mutated through signed atomic increments; the
/// row is never read, modified and written back.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Unique plant ID.
    pub id: PlantId,
    /// Plant name.
    pub name: String,
    /// Photo URL.
    pub image: Option<String>,
    /// Category ("succulent", "fern", ...).
    pub category: String,
    /// Seller-supplied description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock. Never negative.
    pub quantity: i32,
    /// Seller display name.
    pub seller_name: Option<String>,
    /// Seller avatar URL.
    pub seller_image: Option<String>,
    /// Seller email.
    pub seller_email: Email,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}
