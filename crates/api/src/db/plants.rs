//! Inventory repository.

use sqlx::PgPool;

use plantnet_core::{AdjustDirection, Email, PlantId};

use super::{RepositoryError, bounded};
use crate::models::Plant;

const PLANT_COLUMNS: &str = "id, name, image, category, description, price, quantity, \
                             seller_name, seller_image, seller_email, created_at";

/// A plant listing to insert.
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: String,
    pub image: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub price: rust_decimal::Decimal,
    pub quantity: i32,
    pub seller_name: Option<String>,
    pub seller_image: Option<String>,
    pub seller_email: Email,
}

/// Repository for inventory operations.
pub struct PlantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlantRepository<'a> {
    /// Create a new plant repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, plant: NewPlant) -> Result<Plant, RepositoryError> {
        bounded(async {
            let created = sqlx::query_as::<_, Plant>(&format!(
                "INSERT INTO plants
                     (name, image, category, description, price, quantity,
                      seller_name, seller_image, seller_email)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                 RETURNING {PLANT_COLUMNS}"
            ))
            .bind(plant.name)
            .bind(plant.image)
            .bind(plant.category)
            .bind(plant.description)
            .bind(plant.price)
            .bind(plant.quantity)
            .bind(plant.seller_name)
            .bind(plant.seller_image)
            .bind(plant.seller_email)
            .fetch_one(self.pool)
            .await?;
            Ok(created)
        })
        .await
    }

    /// List every plant, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Plant>, RepositoryError> {
        bounded(async {
            let plants = sqlx::query_as::<_, Plant>(&format!(
                "SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at DESC"
            ))
            .fetch_all(self.pool)
            .await?;
            Ok(plants)
        })
        .await
    }

    /// Fetch one plant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such plant exists.
    pub async fn get_by_id(&self, id: PlantId) -> Result<Plant, RepositoryError> {
        bounded(async {
            sqlx::query_as::<_, Plant>(&format!(
                "SELECT {PLANT_COLUMNS} FROM plants WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
        })
        .await
    }

    /// Apply a signed stock delta as one atomic increment.
    ///
    /// `delta` is always positive; `direction` gives it its sign. A
    /// decrease carries the floor check in the filter (`quantity >= delta`)
    /// so stock can never go negative, and there is no separate read that
    /// could race a concurrent order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InsufficientStock` if a decrease would go
    /// below zero, `RepositoryError::NotFound` if the plant is unknown.
    pub async fn adjust_quantity(
        &self,
        id: PlantId,
        delta: i32,
        direction: AdjustDirection,
    ) -> Result<Plant, RepositoryError> {
        bounded(async {
            let sql = match direction {
                AdjustDirection::Decrease => format!(
                    "UPDATE plants SET quantity = quantity - $2
                     WHERE id = $1 AND quantity >= $2
                     RETURNING {PLANT_COLUMNS}"
                ),
                AdjustDirection::Increase => format!(
                    "UPDATE plants SET quantity = quantity + $2
                     WHERE id = $1
                     RETURNING {PLANT_COLUMNS}"
                ),
            };

            let updated = sqlx::query_as::<_, Plant>(&sql)
                .bind(id)
                .bind(delta)
                .fetch_optional(self.pool)
                .await?;

            match updated {
                Some(plant) => Ok(plant),
                // Zero rows on a decrease: either the plant is unknown or
                // the floor check failed. Probe existence to tell them apart.
                None => {
                    if direction == AdjustDirection::Decrease && self.exists(id).await? {
                        Err(RepositoryError::InsufficientStock)
                    } else {
                        Err(RepositoryError::NotFound)
                    }
                }
            }
        })
        .await
    }

    async fn exists(&self, id: PlantId) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i32>("SELECT 1 FROM plants WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(found.is_some())
    }
}
