//! Repository adapters for the infrastructure layer

use std::path::PathBuf;

use clove_domain::model::CarbonReference;
use clove_domain::repository::CarbonReferenceRepository;
use clove_infra::persistence::{
    FileCarbonReferenceRepository, FileDishRepository, FilePriceReferenceRepository,
};
use clove_types::Result;

use crate::config::Config;
use crate::constants::default_carbon_reference;

/// Open the dish table at a CSV path
pub fn open_dish_repo(csv_path: PathBuf) -> Result<FileDishRepository> {
    FileDishRepository::new(csv_path)
}

/// Price table from the command line, falling back to the configured one
pub fn open_price_repo(cli_path: Option<PathBuf>, config: &Config) -> FilePriceReferenceRepository {
    FilePriceReferenceRepository::new(cli_path.or_else(|| config.price_reference.clone()))
}

/// Carbon reference from the command line or config, else the built-in table
pub fn load_carbon_reference(cli_path: Option<PathBuf>, config: &Config) -> Result<CarbonReference> {
    match cli_path.or_else(|| config.carbon_reference.clone()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading carbon reference override");
            FileCarbonReferenceRepository::new(path).load()
        }
        None => Ok(default_carbon_reference().clone()),
    }
}
