//! Inventory handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use plantnet_core::{AdjustDirection, Email, PlantId};

use crate::db::PlantRepository;
use crate::db::plants::NewPlant;
use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAuth;
use crate::models::Plant;
use crate::state::AppState;

/// Request body for creating a listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub name: String,
    pub image: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub seller_name: Option<String>,
    pub seller_image: Option<String>,
    pub seller_email: Email,
}

/// Request body for a stock adjustment, preserving the original clients'
/// field names: `quantityToUpdate` plus a `status` of `increase` or
/// `decrease` (the default).
#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    #[serde(rename = "quantityToUpdate")]
    pub quantity_to_update: i32,
    #[serde(default)]
    pub status: AdjustDirection,
}

/// `POST /plants` - create a listing (guarded).
///
/// # Errors
///
/// Returns 400 for a non-positive starting quantity or negative price.
pub async fn create(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreatePlantRequest>,
) -> Result<(StatusCode, Json<Plant>)> {
    if body.quantity < 0 {
        return Err(AppError::BadRequest("quantity cannot be negative".to_owned()));
    }
    if body.price < Decimal::ZERO {
        return Err(AppError::BadRequest("price cannot be negative".to_owned()));
    }

    let plant = PlantRepository::new(state.pool())
        .create(NewPlant {
            name: body.name,
            image: body.image,
            category: body.category,
            description: body.description,
            price: body.price,
            quantity: body.quantity,
            seller_name: body.seller_name,
            seller_image: body.seller_image,
            seller_email: body.seller_email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(plant)))
}

/// `GET /plants` - list all plants (open).
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Plant>>> {
    let plants = PlantRepository::new(state.pool()).list_all().await?;
    Ok(Json(plants))
}

/// `GET /plants/{id}` - fetch one plant (open).
///
/// A malformed id fails path deserialization and is rejected with 400
/// before any store access.
///
/// # Errors
///
/// Returns 404 if no such plant exists.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
) -> Result<Json<Plant>> {
    let plant = PlantRepository::new(state.pool()).get_by_id(id).await?;
    Ok(Json(plant))
}

/// `PATCH /plants/quantity/{id}` - apply a signed stock delta (guarded).
///
/// # Errors
///
/// Returns 400 for a non-positive delta, 409 if a decrease would take
/// stock below zero, 404 for an unknown plant.
pub async fn adjust_quantity(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
    Json(body): Json<AdjustQuantityRequest>,
) -> Result<Json<Plant>> {
    if body.quantity_to_update <= 0 {
        return Err(AppError::BadRequest(
            "quantityToUpdate must be positive".to_owned(),
        ));
    }

    let plant = PlantRepository::new(state.pool())
        .adjust_quantity(id, body.quantity_to_update, body.status)
        .await?;
    Ok(Json(plant))
}
