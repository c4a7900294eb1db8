//! Order ledger types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use plantnet_core::{Email, OrderId, OrderStatus, PlantId};

/// An order as stored in the ledger.
///
/// `plant_id` is a soft reference: the plant may be removed later and the
/// order stays behind.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Referenced plant (snapshot reference, no FK).
    pub plant_id: PlantId,
    /// Customer display name.
    pub customer_name: Option<String>,
    /// Customer email, the key the ledger is queried by.
    pub customer_email: Email,
    /// Customer avatar URL.
    pub customer_image: Option<String>,
    /// Email of the selling party.
    pub seller_email: Email,
    /// Total price at checkout.
    pub price: Decimal,
    /// Units ordered.
    pub quantity: i32,
    /// Delivery address.
    pub address: Option<String>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// An order enriched with fields copied from its referenced plant.
///
/// Produced by the customer-orders read: a left join against the inventory
/// flattened into the order record. When the plant has been removed the
/// three enrichment fields are absent from the serialized output rather
/// than null, and the read still succeeds.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    /// Unique order ID.
    pub id: OrderId,
    /// Referenced plant (snapshot reference, no FK).
    pub plant_id: PlantId,
    /// Customer display name.
    pub customer_name: Option<String>,
    /// Customer email, the key the ledger is queried by.
    pub customer_email: Email,
    /// Customer avatar URL.
    pub customer_image: Option<String>,
    /// Email of the selling party.
    pub seller_email: Email,
    /// Total price at checkout.
    pub price: Decimal,
    /// Units ordered.
    pub quantity: i32,
    /// Delivery address.
    pub address: Option<String>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Plant name, absent if the plant was removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Plant photo URL, absent if the plant was removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Plant category, absent if the plant was removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order(name: Option<&str>) -> CustomerOrder {
        CustomerOrder {
            id: OrderId::new(1),
            plant_id: PlantId::new(7),
            customer_name: Some("Fern Fan".to_owned()),
            customer_email: Email::parse("fern@example.com").unwrap(),
            customer_image: None,
            seller_email: Email::parse("seller@example.com").unwrap(),
            price: Decimal::new(1499, 2),
            quantity: 2,
            address: Some("12 Greenhouse Lane".to_owned()),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            name: name.map(str::to_owned),
            image: name.map(|_| "https://img.example/monstera.jpg".to_owned()),
            category: name.map(|_| "indoor".to_owned()),
        }
    }

    #[test]
    fn enriched_order_carries_plant_fields() {
        let json = serde_json::to_value(order(Some("Monstera"))).unwrap();
        assert_eq!(json["name"], "Monstera");
        assert_eq!(json["category"], "indoor");
        assert_eq!(json["plantId"], 7);
    }

    #[test]
    fn missing_plant_omits_enrichment_fields() {
        // The plant behind the order was deleted; the order still
        // serializes, without the enrichment keys.
        let json = serde_json::to_value(order(None)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("name"));
        assert!(!obj.contains_key("image"));
        assert!(!obj.contains_key("category"));
        assert_eq!(json["status"], "pending");
    }
}
