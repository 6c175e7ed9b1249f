//! Whole-menu analysis outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dish::DishRecord;
use super::result::DishResult;

/// Input row paired with its derived result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub record: DishRecord,
    pub result: DishResult,
}

/// Non-fatal problem reported alongside an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Which input the problem came from (e.g. "price reference")
    pub source: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(source: &str, message: impl Into<String>) -> Self {
        Self {
            source: source.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Aggregate observations over a menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSummary {
    pub dish_count: usize,
    pub low_margin_count: usize,
    pub high_co2_count: usize,
    #[serde(with = "clove_types::nullable_f64")]
    pub average_cost: f64,
    #[serde(with = "clove_types::nullable_f64")]
    pub average_co2e_kg: f64,
    #[serde(with = "clove_types::nullable_f64")]
    pub total_profit: f64,
    /// Dishes above both the average cost and the average CO2e
    pub high_impact: Vec<String>,
    /// Each dish's share of total profit, in input order
    pub profit_shares: Vec<ProfitShare>,
    pub rankings: Rankings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitShare {
    pub name: String,
    /// Percent of total profit; `None` when the total is zero or undefined
    pub share_pct: Option<f64>,
}

/// Dish names ordered the way each chart presents them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub by_margin_desc: Vec<String>,
    pub by_co2e_desc: Vec<String>,
    pub by_profit_asc: Vec<String>,
    pub by_co2e_per_profit_desc: Vec<String>,
}

/// Result of analyzing a dish table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuAnalysis {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<AnalysisEntry>,
    pub summary: MenuSummary,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl MenuAnalysis {
    pub fn results(&self) -> impl Iterator<Item = &DishResult> {
        self.entries.iter().map(|e| &e.result)
    }
}
