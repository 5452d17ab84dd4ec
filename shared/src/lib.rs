//! Shared types and models for the Seed Advisor
//!
//! This crate contains the domain records, the seed recommender and the
//! validation helpers shared between the backend, the WASM bindings and the
//! catalogue loader.

pub mod catalogue;
pub mod models;
pub mod recommender;
pub mod types;
pub mod validation;

pub use models::*;
pub use recommender::*;
pub use types::*;
pub use validation::*;
