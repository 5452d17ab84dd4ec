//! HTTP handlers for the Seed Advisor API

pub mod health;
pub mod locations;
pub mod seeds;

pub use health::health_check;
pub use locations::{get_location, list_locations};
pub use seeds::{list_seeds, suggest_seeds};
