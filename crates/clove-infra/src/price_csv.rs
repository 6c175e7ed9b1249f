//! CSV loader for the optional ingredient price table
//!
//! Expected header: Ingredient, Price per g (€)

use std::path::Path;

use clove_domain::model::PriceReference;
use thiserror::Error;

use crate::fields::{cell, find_column, parse_number};

pub const INGREDIENT_COLUMN: &str = "Ingredient";
pub const PRICE_COLUMN: &str = "Price per g (€)";

/// Problems with a price table. Callers fall back to an empty reference.
#[derive(Error, Debug)]
pub enum PriceReferenceError {
    #[error("Failed to read price file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse price CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing expected column: {0}")]
    MissingColumn(String),

    #[error("Invalid price in row {row}: {value}")]
    InvalidPrice { row: usize, value: String },
}

impl From<PriceReferenceError> for clove_types::Error {
    fn from(e: PriceReferenceError) -> Self {
        match e {
            PriceReferenceError::IoError(io) => clove_types::Error::Io(io),
            other => clove_types::Error::Csv(other.to_string()),
        }
    }
}

pub fn load_price_reference<P: AsRef<Path>>(path: P) -> Result<PriceReference, PriceReferenceError> {
    let content = std::fs::read_to_string(path)?;
    load_price_reference_from_str(&content)
}

/// Rows with a blank ingredient or a blank price are skipped
pub fn load_price_reference_from_str(content: &str) -> Result<PriceReference, PriceReferenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let name_col = find_column(&headers, &[INGREDIENT_COLUMN])
        .ok_or_else(|| PriceReferenceError::MissingColumn(INGREDIENT_COLUMN.to_string()))?;
    let price_col = find_column(&headers, &[PRICE_COLUMN, "Price per g"])
        .ok_or_else(|| PriceReferenceError::MissingColumn(PRICE_COLUMN.to_string()))?;

    let mut prices = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;

        let (Some(name), Some(price_str)) = (cell(&record, Some(name_col)), cell(&record, Some(price_col))) else {
            continue;
        };
        let price = parse_number(price_str).ok_or_else(|| PriceReferenceError::InvalidPrice {
            row,
            value: price_str.to_string(),
        })?;
        prices.push((name.to_string(), price));
    }

    tracing::debug!(count = prices.len(), "loaded price reference");
    Ok(prices.into_iter().collect())
}
