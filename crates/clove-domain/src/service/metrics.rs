//! Derived metrics and policy flags

use std::collections::BTreeSet;

use crate::model::DishFlag;

/// Margin (%) below which a dish is flagged
pub const LOW_MARGIN_THRESHOLD_PCT: f64 = 60.0;

/// Emissions (kg CO2e) above which a dish is flagged
pub const HIGH_CO2_THRESHOLD_KG: f64 = 3.0;

/// Flag thresholds. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagPolicy {
    pub min_margin_pct: f64,
    pub max_co2e_kg: f64,
}

impl Default for FlagPolicy {
    fn default() -> Self {
        Self {
            min_margin_pct: LOW_MARGIN_THRESHOLD_PCT,
            max_co2e_kg: HIGH_CO2_THRESHOLD_KG,
        }
    }
}

impl FlagPolicy {
    pub fn flags(&self, margin_pct: f64, co2e_kg: f64) -> BTreeSet<DishFlag> {
        let mut flags = BTreeSet::new();
        // NaN compares false, so an undefined margin is never flagged
        if margin_pct < self.min_margin_pct {
            flags.insert(DishFlag::LowMargin);
        }
        if co2e_kg > self.max_co2e_kg {
            flags.insert(DishFlag::HighCo2);
        }
        flags
    }
}

/// Round to 2 decimals, ties to even. Non-finite values pass through.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub margin_pct: f64,
    pub profit: f64,
    pub co2e_per_profit: f64,
    pub flags: BTreeSet<DishFlag>,
}

/// Margin, profit, emissions per profit, and flags for one dish.
///
/// Division by a zero selling price or zero profit yields a non-finite value
/// rather than an error.
pub fn derive_metrics(
    selling_price: f64,
    total_cost: f64,
    co2e_kg: f64,
    policy: &FlagPolicy,
) -> DerivedMetrics {
    let margin_pct = round2((selling_price - total_cost) / selling_price * 100.0);
    let profit = round2(selling_price - total_cost);
    let co2e_per_profit = round2(co2e_kg / profit);
    let flags = policy.flags(margin_pct, co2e_kg);

    DerivedMetrics {
        margin_pct,
        profit,
        co2e_per_profit,
        flags,
    }
}
