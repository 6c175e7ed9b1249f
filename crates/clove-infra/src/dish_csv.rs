//! CSV loader for dish tables
//!
//! Expected header (slot columns optional):
//! Dish Name, Selling Price (€), Ingredient 1, Qty 1 (g), Cost per g 1 (€), ... up to slot 3

use std::fs::File;
use std::io::Read;
use std::path::Path;

use clove_domain::model::{DishRecord, IngredientSlot, SLOT_COUNT};
use thiserror::Error;

use crate::fields::{cell, find_column, parse_number};

pub const DISH_NAME_COLUMN: &str = "Dish Name";
pub const SELLING_PRICE_COLUMN: &str = "Selling Price (€)";

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Missing value in row {row}, column {column}")]
    MissingValue { row: usize, column: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl From<CsvLoaderError> for clove_types::Error {
    fn from(e: CsvLoaderError) -> Self {
        match e {
            CsvLoaderError::IoError(io) => clove_types::Error::Io(io),
            other => clove_types::Error::Csv(other.to_string()),
        }
    }
}

/// Header names for one ingredient slot (1-based)
pub fn slot_headers(slot: usize) -> [String; 3] {
    [
        format!("Ingredient {}", slot),
        format!("Qty {} (g)", slot),
        format!("Cost per g {} (€)", slot),
    ]
}

/// Column indexes for one slot; any of them may be absent
#[derive(Debug, Clone, Copy, Default)]
struct SlotColumns {
    ingredient: Option<usize>,
    quantity: Option<usize>,
    cost: Option<usize>,
}

struct DishColumns {
    name: usize,
    price: usize,
    slots: [SlotColumns; SLOT_COUNT],
}

impl DishColumns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvLoaderError> {
        let name = find_column(headers, &[DISH_NAME_COLUMN])
            .ok_or_else(|| CsvLoaderError::MissingColumn(DISH_NAME_COLUMN.to_string()))?;
        let price = find_column(headers, &[SELLING_PRICE_COLUMN, "Selling Price"])
            .ok_or_else(|| CsvLoaderError::MissingColumn(SELLING_PRICE_COLUMN.to_string()))?;

        let mut slots = [SlotColumns::default(); SLOT_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            let [ingredient, qty, cost] = slot_headers(i + 1);
            let plain_qty = format!("Qty {}", i + 1);
            let plain_cost = format!("Cost per g {}", i + 1);
            slot.ingredient = find_column(headers, &[ingredient.as_str()]);
            slot.quantity = find_column(headers, &[qty.as_str(), plain_qty.as_str()]);
            slot.cost = find_column(headers, &[cost.as_str(), plain_cost.as_str()]);
        }

        Ok(Self { name, price, slots })
    }
}

/// Load dish rows from a UTF-8 CSV file
pub fn load_dishes<P: AsRef<Path>>(path: P) -> Result<Vec<DishRecord>, CsvLoaderError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    load_dishes_from_str(&content)
}

/// Load dish rows from CSV text
pub fn load_dishes_from_str(content: &str) -> Result<Vec<DishRecord>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = DishColumns::from_headers(&headers)?;

    let mut dishes = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        dishes.push(parse_record(&record, row_num, &columns)?);
    }

    tracing::debug!(count = dishes.len(), "loaded dish rows");
    Ok(dishes)
}

fn parse_record(
    record: &csv::StringRecord,
    row: usize,
    columns: &DishColumns,
) -> Result<DishRecord, CsvLoaderError> {
    let name = cell(record, Some(columns.name)).unwrap_or("").to_string();

    let price_str = cell(record, Some(columns.price)).ok_or_else(|| CsvLoaderError::MissingValue {
        row,
        column: SELLING_PRICE_COLUMN.to_string(),
    })?;
    let selling_price = parse_f64(price_str, row, SELLING_PRICE_COLUMN)?;

    let mut dish = DishRecord::new(&name, selling_price);
    for (i, cols) in columns.slots.iter().enumerate() {
        let [_, qty_header, cost_header] = slot_headers(i + 1);
        dish.slots[i] = IngredientSlot {
            ingredient: cell(record, cols.ingredient).map(str::to_string),
            quantity_g: cell(record, cols.quantity)
                .map(|s| parse_f64(s, row, &qty_header))
                .transpose()?,
            cost_per_g: cell(record, cols.cost)
                .map(|s| parse_f64(s, row, &cost_header))
                .transpose()?,
        };
    }

    Ok(dish)
}

fn parse_f64(s: &str, row: usize, column: &str) -> Result<f64, CsvLoaderError> {
    parse_number(s).ok_or_else(|| CsvLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}
