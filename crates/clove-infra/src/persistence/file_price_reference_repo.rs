//! File-based implementation of PriceReferenceRepository

use std::path::PathBuf;

use clove_domain::model::PriceReference;
use clove_domain::repository::PriceReferenceRepository;
use clove_types::Error;

use crate::price_csv::load_price_reference;

/// Price table backed by an optional CSV file
pub struct FilePriceReferenceRepository {
    csv_path: Option<PathBuf>,
}

impl FilePriceReferenceRepository {
    pub fn new(csv_path: Option<PathBuf>) -> Self {
        Self { csv_path }
    }
}

impl PriceReferenceRepository for FilePriceReferenceRepository {
    /// No path configured gives an empty reference
    fn load(&self) -> Result<PriceReference, Error> {
        match &self.csv_path {
            Some(path) => load_price_reference(path).map_err(Into::into),
            None => Ok(PriceReference::empty()),
        }
    }
}
