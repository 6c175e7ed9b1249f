//! Infrastructure layer - loaders for dish tables and reference data

pub mod carbon_toml;
pub mod dish_csv;
pub mod persistence;
pub mod price_csv;
pub mod template;

mod fields;
