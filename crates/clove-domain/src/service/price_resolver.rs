//! Effective per-gram cost resolution

use crate::model::PriceReference;

/// Decide the per-gram cost for a slot.
///
/// An explicit cost always wins. Otherwise the trimmed ingredient name is
/// looked up in the price reference. `None` means no cost is known and the
/// slot adds nothing to the dish cost.
pub fn resolve_cost_per_gram(
    ingredient: &str,
    explicit_cost: Option<f64>,
    prices: &PriceReference,
) -> Option<f64> {
    if let Some(cost) = explicit_cost.filter(|c| !c.is_nan()) {
        return Some(cost);
    }
    prices.price_per_gram(ingredient)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> PriceReference {
        [("Pasta".to_string(), 0.01), ("Tofu".to_string(), 0.05)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_explicit_cost_wins() {
        assert_eq!(resolve_cost_per_gram("Pasta", Some(0.02), &prices()), Some(0.02));
    }

    #[test]
    fn test_falls_back_to_reference() {
        assert_eq!(resolve_cost_per_gram("Pasta", None, &prices()), Some(0.01));
    }

    #[test]
    fn test_reference_lookup_trims() {
        assert_eq!(resolve_cost_per_gram("  Tofu ", None, &prices()), Some(0.05));
    }

    #[test]
    fn test_nan_explicit_cost_is_missing() {
        assert_eq!(resolve_cost_per_gram("Tofu", Some(f64::NAN), &prices()), Some(0.05));
    }

    #[test]
    fn test_unknown_ingredient_unresolved() {
        assert_eq!(resolve_cost_per_gram("Seitan", None, &prices()), None);
        assert_eq!(resolve_cost_per_gram("Pasta", None, &PriceReference::empty()), None);
    }

    #[test]
    fn test_negative_explicit_cost_passes_through() {
        assert_eq!(resolve_cost_per_gram("Pasta", Some(-0.01), &prices()), Some(-0.01));
    }
}
