//! File-based implementation of CarbonReferenceRepository

use std::path::PathBuf;

use clove_domain::model::CarbonReference;
use clove_domain::repository::CarbonReferenceRepository;
use clove_types::Error;

use crate::carbon_toml::load_carbon_reference;

/// Carbon reference backed by a TOML file
pub struct FileCarbonReferenceRepository {
    toml_path: PathBuf,
}

impl FileCarbonReferenceRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }

    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }
}

impl CarbonReferenceRepository for FileCarbonReferenceRepository {
    fn load(&self) -> Result<CarbonReference, Error> {
        load_carbon_reference(&self.toml_path)
    }
}
