//! PlantNet Core - Shared types library.
//!
//! This crate provides the common types used across the PlantNet components:
//! - `api` - The marketplace HTTP backend
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database trait implementations are gated behind the `postgres` feature so
//! the crate stays lightweight for consumers that only need the types.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
