//! Carbon reference loader from TOML
//!
//! ```toml
//! [[ingredients]]
//! name = "Pasta"
//! kg_co2e_per_kg = 1.1
//! ```

use std::fs;
use std::path::Path;

use clove_domain::model::CarbonReference;
use clove_types::{ConfigError, Error, Result};
use serde::{Deserialize, Serialize};

/// One `[[ingredients]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonFactorEntry {
    pub name: String,
    pub kg_co2e_per_kg: f64,
}

/// Container for parsing the carbon reference file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CarbonReferenceFile {
    #[serde(default)]
    pub ingredients: Vec<CarbonFactorEntry>,
}

impl CarbonReferenceFile {
    pub fn from_reference(reference: &CarbonReference) -> Self {
        Self {
            ingredients: reference
                .entries()
                .into_iter()
                .map(|(name, factor)| CarbonFactorEntry {
                    name: name.to_string(),
                    kg_co2e_per_kg: factor,
                })
                .collect(),
        }
    }

    pub fn into_reference(self) -> CarbonReference {
        self.ingredients
            .into_iter()
            .map(|e| (e.name.trim().to_string(), e.kg_co2e_per_kg))
            .collect()
    }
}

/// Load a carbon reference from a TOML file
pub fn load_carbon_reference(path: &Path) -> Result<CarbonReference> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read carbon reference file {}: {}",
            path.display(),
            e
        )))
    })?;
    load_carbon_reference_from_str(&content)
}

/// Load a carbon reference from TOML text
pub fn load_carbon_reference_from_str(content: &str) -> Result<CarbonReference> {
    let file: CarbonReferenceFile = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse carbon reference TOML: {}",
            e
        )))
    })?;
    let reference = file.into_reference();
    tracing::debug!(count = reference.len(), "loaded carbon reference");
    Ok(reference)
}

/// Render a carbon reference as TOML
pub fn carbon_reference_to_toml(reference: &CarbonReference) -> Result<String> {
    toml::to_string_pretty(&CarbonReferenceFile::from_reference(reference))
        .map_err(|e| Error::Config(ConfigError::ParseError(e.to_string())))
}
