//! Derived per-dish results

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Policy flag raised on a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishFlag {
    /// Margin below the policy minimum
    LowMargin,
    /// Emissions above the policy maximum
    #[serde(rename = "HIGH_CO2")]
    HighCo2,
}

impl DishFlag {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            DishFlag::LowMargin => "Low margin",
            DishFlag::HighCo2 => "High CO₂",
        }
    }
}

/// Concatenated flag labels for table and report views
pub fn flags_label(flags: &BTreeSet<DishFlag>) -> String {
    flags
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Metrics derived for one dish. Never mutated after estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishResult {
    pub name: String,
    pub selling_price: f64,
    pub estimated_co2e_kg: f64,
    pub total_cost: f64,
    /// Non-finite when the selling price is zero
    #[serde(with = "clove_types::nullable_f64")]
    pub margin_pct: f64,
    pub profit: f64,
    /// Non-finite when the profit is zero
    #[serde(with = "clove_types::nullable_f64")]
    pub co2e_per_profit: f64,
    #[serde(default)]
    pub flags: BTreeSet<DishFlag>,
}

impl DishResult {
    pub fn has_flag(&self, flag: DishFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn flag_label(&self) -> String {
        flags_label(&self.flags)
    }
}
