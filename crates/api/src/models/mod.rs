//! Domain models.
//!
//! These map one-to-one onto table rows (`sqlx::FromRow`) and serialize in
//! the camelCase wire form the marketplace frontend consumes.

pub mod order;
pub mod plant;
pub mod user;

pub use order::{CustomerOrder, Order};
pub use plant::Plant;
pub use user::User;
