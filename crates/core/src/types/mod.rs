//! Core types for PlantNet.

pub mod email;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use status::{AdjustDirection, OrderStatus, Role, UpgradeStatus};
