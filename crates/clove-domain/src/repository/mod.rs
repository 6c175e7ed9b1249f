//! Repository trait definitions for menu inputs

use clove_types::Error;

use crate::model::{CarbonReference, DishRecord, PriceReference};

/// Source of dish rows
pub trait DishRepository {
    /// Load all dishes in their original order
    fn find_all(&self) -> Result<Vec<DishRecord>, Error>;
}

/// Source of the optional price override table
pub trait PriceReferenceRepository {
    /// Load the price table. Callers treat failures as non-fatal.
    fn load(&self) -> Result<PriceReference, Error>;
}

/// Source of emission factors
pub trait CarbonReferenceRepository {
    fn load(&self) -> Result<CarbonReference, Error>;
}

/// In-memory repositories, used for built-in tables and in tests
impl DishRepository for Vec<DishRecord> {
    fn find_all(&self) -> Result<Vec<DishRecord>, Error> {
        Ok(self.clone())
    }
}

impl PriceReferenceRepository for PriceReference {
    fn load(&self) -> Result<PriceReference, Error> {
        Ok(self.clone())
    }
}

impl CarbonReferenceRepository for CarbonReference {
    fn load(&self) -> Result<CarbonReference, Error> {
        Ok(self.clone())
    }
}
