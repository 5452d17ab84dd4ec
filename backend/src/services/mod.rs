//! Business logic services for the Seed Advisor

pub mod catalogue;
pub mod suggestion;

pub use catalogue::CatalogueService;
pub use suggestion::{SuggestionBatch, SuggestionService};
