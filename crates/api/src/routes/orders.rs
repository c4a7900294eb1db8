//! Order ledger handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use plantnet_core::{Email, OrderId, PlantId};

use crate::db::OrderRepository;
use crate::db::orders::NewOrder;
use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAuth;
use crate::models::{CustomerOrder, Order};
use crate::state::AppState;

/// Customer details embedded in a checkout request.
#[derive(Debug, Deserialize)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub email: Email,
    pub image: Option<String>,
}

/// Request body for placing an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub plant_id: PlantId,
    pub customer: CustomerInfo,
    pub seller_email: Email,
    pub price: Decimal,
    pub quantity: i32,
    pub address: Option<String>,
}

/// `POST /orders` - place an order (guarded).
///
/// Order insert and stock decrement run as one transaction; an
/// insufficient-stock checkout inserts nothing.
///
/// # Errors
///
/// Returns 400 for a non-positive quantity, 404 for an unknown plant,
/// 409 when stock is insufficient.
pub async fn place(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    if body.quantity <= 0 {
        return Err(AppError::BadRequest("quantity must be positive".to_owned()));
    }

    let order = OrderRepository::new(state.pool())
        .place(NewOrder {
            plant_id: body.plant_id,
            customer_name: body.customer.name,
            customer_email: body.customer.email,
            customer_image: body.customer.image,
            seller_email: body.seller_email,
            price: body.price,
            quantity: body.quantity,
            address: body.address,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /customer-orders/{email}` - enriched order list (guarded).
///
/// A customer with no orders gets an empty list; an order whose plant was
/// removed comes back without the enrichment fields.
///
/// # Errors
///
/// Returns 400 for a malformed email, 500 on store failure.
pub async fn list_for_customer(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<CustomerOrder>>> {
    let email = Email::parse(&email).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let orders = OrderRepository::new(state.pool())
        .list_for_customer(&email)
        .await?;
    Ok(Json(orders))
}

/// `DELETE /orders/{id}` - cancel an order (guarded).
///
/// # Errors
///
/// Returns 409 if the order has been delivered (it stays persisted),
/// 404 if it does not exist.
pub async fn cancel(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<StatusCode> {
    OrderRepository::new(state.pool()).cancel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
