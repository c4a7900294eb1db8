//! Order ledger repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use plantnet_core::{Email, OrderId, OrderStatus, PlantId};

use super::{RepositoryError, bounded};
use crate::models::{CustomerOrder, Order};

const ORDER_COLUMNS: &str = "id, plant_id, customer_name, customer_email, customer_image, \
                             seller_email, price, quantity, address, status, created_at";

/// An order to insert at checkout.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub plant_id: PlantId,
    pub customer_name: Option<String>,
    pub customer_email: Email,
    pub customer_image: Option<String>,
    pub seller_email: Email,
    pub price: Decimal,
    pub quantity: i32,
    pub address: Option<String>,
}

/// Repository for order ledger operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place an order: decrement the plant's stock and insert the order as
    /// one transaction.
    ///
    /// The decrement carries the floor check in its filter, so the whole
    /// transaction aborts (and nothing is inserted) when stock is
    /// insufficient. Stock and ledger can never drift apart at checkout.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the plant is unknown,
    /// `RepositoryError::InsufficientStock` if the decrement would go below
    /// zero.
    pub async fn place(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        bounded(async {
            let mut tx = self.pool.begin().await?;

            let decremented = sqlx::query(
                "UPDATE plants SET quantity = quantity - $2
                 WHERE id = $1 AND quantity >= $2",
            )
            .bind(order.plant_id)
            .bind(order.quantity)
            .execute(&mut *tx)
            .await?;

            if decremented.rows_affected() == 0 {
                let exists =
                    sqlx::query_scalar::<_, i32>("SELECT 1 FROM plants WHERE id = $1")
                        .bind(order.plant_id)
                        .fetch_optional(&mut *tx)
                        .await?
                        .is_some();
                return Err(if exists {
                    RepositoryError::InsufficientStock
                } else {
                    RepositoryError::NotFound
                });
            }

            let placed = sqlx::query_as::<_, Order>(&format!(
                "INSERT INTO orders
                     (plant_id, customer_name, customer_email, customer_image,
                      seller_email, price, quantity, address)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {ORDER_COLUMNS}"
            ))
            .bind(order.plant_id)
            .bind(order.customer_name)
            .bind(order.customer_email)
            .bind(order.customer_image)
            .bind(order.seller_email)
            .bind(order.price)
            .bind(order.quantity)
            .bind(order.address)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok(placed)
        })
        .await
    }

    /// Enriched order list for one customer.
    ///
    /// A left join copies name/image/category from the referenced plant
    /// into each order. Orders whose plant has been removed come back with
    /// those fields `None`; the read never fails on a dangling reference.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_customer(
        &self,
        email: &Email,
    ) -> Result<Vec<CustomerOrder>, RepositoryError> {
        bounded(async {
            let orders = sqlx::query_as::<_, CustomerOrder>(
                "SELECT o.id, o.plant_id, o.customer_name, o.customer_email,
                        o.customer_image, o.seller_email, o.price, o.quantity,
                        o.address, o.status, o.created_at,
                        p.name AS name, p.image AS image, p.category AS category
                 FROM orders o
                 LEFT JOIN plants p ON p.id = o.plant_id
                 WHERE o.customer_email = $1
                 ORDER BY o.created_at DESC",
            )
            .bind(email)
            .fetch_all(self.pool)
            .await?;
            Ok(orders)
        })
        .await
    }

    /// Cancel (delete) an order unless it has been delivered, restocking
    /// the referenced plant.
    ///
    /// The delivered check sits in the delete filter itself, so a
    /// concurrent delivery cannot slip between a read and the delete. The
    /// restock is best-effort within the same transaction: a removed plant
    /// simply matches no row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the order was delivered,
    /// `RepositoryError::NotFound` if it does not exist.
    pub async fn cancel(&self, id: OrderId) -> Result<(), RepositoryError> {
        bounded(async {
            let mut tx = self.pool.begin().await?;

            let deleted = sqlx::query_as::<_, (PlantId, i32)>(
                "DELETE FROM orders
                 WHERE id = $1 AND status <> $2
                 RETURNING plant_id, quantity",
            )
            .bind(id)
            .bind(OrderStatus::Delivered)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((plant_id, quantity)) = deleted else {
                let status = sqlx::query_scalar::<_, OrderStatus>(
                    "SELECT status FROM orders WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
                return Err(match status {
                    Some(_) => RepositoryError::Conflict(
                        "cannot cancel an order after delivery".to_owned(),
                    ),
                    None => RepositoryError::NotFound,
                });
            };

            sqlx::query("UPDATE plants SET quantity = quantity + $2 WHERE id = $1")
                .bind(plant_id)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            Ok(())
        })
        .await
    }
}
