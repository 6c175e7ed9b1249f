//! Built-in reference data

pub mod carbon_factors;

pub use carbon_factors::{default_carbon_reference, DEFAULT_CARBON_REFERENCE};
