//! Ingredient reference tables
//!
//! Keys are matched exactly after trimming the looked-up name. No case folding.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Emission factors in kg CO2e per kg of ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarbonReference {
    factors: HashMap<String, f64>,
}

impl CarbonReference {
    pub fn new(factors: HashMap<String, f64>) -> Self {
        Self { factors }
    }

    /// Emission factor for an ingredient, 0 when untracked
    pub fn factor(&self, ingredient: &str) -> f64 {
        self.factors.get(ingredient.trim()).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.factors.contains_key(ingredient.trim())
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Entries sorted by ingredient name
    pub fn entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self
            .factors
            .iter()
            .map(|(name, factor)| (name.as_str(), *factor))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(String, f64)> for CarbonReference {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ingredient prices per gram, in currency units
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceReference {
    prices: HashMap<String, f64>,
}

impl PriceReference {
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn price_per_gram(&self, ingredient: &str) -> Option<f64> {
        self.prices.get(ingredient.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, f64)> for PriceReference {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
