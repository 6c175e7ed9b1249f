//! Blank dish table template

use std::path::Path;

use clove_domain::model::SLOT_COUNT;
use clove_types::{Error, Result};

use crate::dish_csv::{slot_headers, DISH_NAME_COLUMN, SELLING_PRICE_COLUMN};

/// Full header row of the dish table
pub fn template_headers() -> Vec<String> {
    let mut headers = vec![DISH_NAME_COLUMN.to_string(), SELLING_PRICE_COLUMN.to_string()];
    for slot in 1..=SLOT_COUNT {
        headers.extend(slot_headers(slot));
    }
    headers
}

/// Write a CSV containing only the header row
pub fn write_dish_template(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;
    writer
        .write_record(template_headers())
        .map_err(|e| Error::Csv(e.to_string()))?;
    writer.flush()?;
    Ok(())
}
