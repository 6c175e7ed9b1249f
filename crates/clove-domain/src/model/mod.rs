//! Domain model types

pub mod analysis;
pub mod dish;
pub mod reference;
pub mod result;

pub use analysis::{AnalysisEntry, Diagnostic, MenuAnalysis, MenuSummary, ProfitShare, Rankings};
pub use dish::{DishRecord, IngredientSlot, SLOT_COUNT};
pub use reference::{CarbonReference, PriceReference};
pub use result::{flags_label, DishFlag, DishResult};
