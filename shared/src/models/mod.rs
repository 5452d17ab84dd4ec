//! Domain models for the Seed Advisor

mod location;
mod seed;
mod suggestion;

pub use location::*;
pub use seed::*;
pub use suggestion::*;
