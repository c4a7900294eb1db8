//! Demo inventory seeding.

use rust_decimal::Decimal;

use super::{CommandError, connect};

/// Demo listings: (name, category, price, quantity).
const DEMO_PLANTS: &[(&str, &str, Decimal, i32)] = &[
    ("Monstera Deliciosa", "indoor", Decimal::from_parts(2499, 0, 0, false, 2), 12),
    ("Snake Plant", "succulent", Decimal::from_parts(1450, 0, 0, false, 2), 30),
    ("Boston Fern", "fern", Decimal::from_parts(999, 0, 0, false, 2), 18),
    ("Fiddle Leaf Fig", "indoor", Decimal::from_parts(3900, 0, 0, false, 2), 6),
    ("Aloe Vera", "succulent", Decimal::from_parts(799, 0, 0, false, 2), 45),
];

const DEMO_SELLER: &str = "greenhouse@plantnet.example";

/// Insert the demo inventory.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    for &(name, category, price, quantity) in DEMO_PLANTS {
        sqlx::query(
            "INSERT INTO plants (name, category, price, quantity, seller_name, seller_email)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(quantity)
        .bind("PlantNet Greenhouse")
        .bind(DEMO_SELLER)
        .execute(&pool)
        .await?;
    }

    tracing::info!("seeded {} demo plants", DEMO_PLANTS.len());
    Ok(())
}
