//! Application services.

pub mod auth;
