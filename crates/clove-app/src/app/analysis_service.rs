//! Analysis Service - menu estimation use case
//!
//! 1. Load dish rows
//! 2. Load the optional price reference, degrading to empty on failure
//! 3. Estimate every dish against the carbon and price references
//! 4. Summarize the menu

use std::path::Path;

use chrono::Utc;
use clove_domain::model::{AnalysisEntry, CarbonReference, Diagnostic, MenuAnalysis, PriceReference};
use clove_domain::repository::{DishRepository, PriceReferenceRepository};
use clove_domain::service::{estimate_dish, summarize, FlagPolicy};
use clove_types::Result;

const PRICE_REFERENCE_SOURCE: &str = "price reference";

/// Options for analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Flag thresholds
    pub policy: FlagPolicy,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: FlagPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Load the price reference, turning failures into a diagnostic and an empty table
pub fn resolve_price_reference(
    repo: &dyn PriceReferenceRepository,
) -> (PriceReference, Option<Diagnostic>) {
    match repo.load() {
        Ok(prices) => (prices, None),
        Err(e) => {
            tracing::warn!(error = %e, "could not read price reference, continuing without it");
            (
                PriceReference::empty(),
                Some(Diagnostic::new(PRICE_REFERENCE_SOURCE, e.to_string())),
            )
        }
    }
}

/// Main entry point: analyze a dish table
///
/// Only a failure to load the dishes themselves is fatal.
pub fn analyze_menu(
    dishes: &dyn DishRepository,
    carbon: &CarbonReference,
    prices: &dyn PriceReferenceRepository,
    options: &AnalysisOptions,
) -> Result<MenuAnalysis> {
    let records = dishes.find_all()?;
    tracing::info!(dishes = records.len(), "analyzing menu");

    let (price_reference, diagnostic) = resolve_price_reference(prices);
    tracing::debug!(
        carbon_entries = carbon.len(),
        price_entries = price_reference.len(),
        "reference tables ready"
    );

    let entries: Vec<AnalysisEntry> = records
        .into_iter()
        .map(|record| {
            let result = estimate_dish(&record, carbon, &price_reference, &options.policy);
            tracing::debug!(
                dish = %result.name,
                cost = result.total_cost,
                co2e_kg = result.estimated_co2e_kg,
                flags = %result.flag_label(),
                "estimated dish"
            );
            AnalysisEntry { record, result }
        })
        .collect();

    let results: Vec<_> = entries.iter().map(|e| e.result.clone()).collect();
    let summary = summarize(&results);

    Ok(MenuAnalysis {
        generated_at: Utc::now(),
        entries,
        summary,
        diagnostics: diagnostic.into_iter().collect(),
    })
}

/// Write an analysis as pretty JSON
pub fn save_analysis(analysis: &MenuAnalysis, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(analysis)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read an analysis previously written as JSON
pub fn load_analysis(path: &Path) -> Result<MenuAnalysis> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clove_domain::model::{DishFlag, DishRecord, IngredientSlot};
    use clove_types::Error;

    struct BrokenPrices;

    impl PriceReferenceRepository for BrokenPrices {
        fn load(&self) -> Result<PriceReference> {
            Err(Error::Csv("Missing expected column: Price per g (€)".to_string()))
        }
    }

    fn carbon() -> CarbonReference {
        [("Pasta".to_string(), 1.1), ("Beef Mince".to_string(), 27.0)]
            .into_iter()
            .collect()
    }

    fn dishes() -> Vec<DishRecord> {
        vec![
            DishRecord::new("Pasta Bowl", 10.0).with_slot(IngredientSlot::new("Pasta", 200.0)),
            DishRecord::new("Beef Burger", 8.0).with_slot(IngredientSlot::new("Beef Mince", 150.0)),
        ]
    }

    #[test]
    fn test_analyze_with_prices() {
        let prices: PriceReference = [("Pasta".to_string(), 0.01)].into_iter().collect();
        let analysis = analyze_menu(&dishes(), &carbon(), &prices, &AnalysisOptions::new()).unwrap();

        assert_eq!(analysis.entries.len(), 2);
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.entries[0].result.total_cost, 2.0);
        assert!(analysis.entries[1].result.has_flag(DishFlag::HighCo2));
        assert_eq!(analysis.summary.high_co2_count, 1);
    }

    #[test]
    fn test_broken_price_reference_is_non_fatal() {
        let analysis = analyze_menu(&dishes(), &carbon(), &BrokenPrices, &AnalysisOptions::new()).unwrap();

        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].source, "price reference");
        assert!(analysis.diagnostics[0].message.contains("Price per g"));
        assert_eq!(analysis.entries[0].result.total_cost, 0.0);
        assert_eq!(analysis.entries[0].result.estimated_co2e_kg, 0.22);
    }

    #[test]
    fn test_json_round_trip_keeps_undefined_metrics() {
        let dishes = vec![DishRecord::new("Free", 0.0).with_slot(IngredientSlot::new("Pasta", 100.0))];
        let analysis = analyze_menu(&dishes, &carbon(), &PriceReference::empty(), &AnalysisOptions::new()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        save_analysis(&analysis, &path).unwrap();
        let loaded = load_analysis(&path).unwrap();

        assert_eq!(loaded.entries.len(), 1);
        assert!(loaded.entries[0].result.margin_pct.is_nan());
        assert_eq!(loaded.entries[0].result.estimated_co2e_kg, 0.11);
    }
}
