//! Service layer module
//!
//! Contains the generation and translation adapters, the model catalog,
//! the price table and the savings calculator

pub mod catalog;
pub mod family;
pub mod generation;
pub mod pricing;
pub mod savings;
pub mod translation;

pub use catalog::ModelCatalog;
pub use family::ModelFamily;
pub use generation::{GenerationOutcome, GenerationPath, GenerationService};
pub use pricing::{ModelPricing, PriceTable};
pub use savings::{calculate, SavingsInput};
pub use translation::{TimedTranslation, TranslationService};
