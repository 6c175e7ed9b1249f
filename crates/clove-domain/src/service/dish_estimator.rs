//! Per-dish cost and emissions estimation

use crate::model::{CarbonReference, DishRecord, DishResult, PriceReference};

use super::metrics::{derive_metrics, round2, FlagPolicy};
use super::price_resolver::resolve_cost_per_gram;

/// Rounded totals for one dish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub co2e_kg: f64,
    pub total_cost: f64,
}

/// Accumulate emissions and cost over the active slots of a dish.
///
/// Quantities are not sign-checked; the arithmetic stays linear.
pub fn estimate(
    dish: &DishRecord,
    carbon: &CarbonReference,
    prices: &PriceReference,
) -> Estimate {
    let mut emission = 0.0;
    let mut cost = 0.0;

    for slot in &dish.slots {
        let Some((ingredient, qty_g)) = slot.active() else {
            continue;
        };

        emission += (qty_g / 1000.0) * carbon.factor(ingredient);

        if let Some(cost_per_g) = resolve_cost_per_gram(ingredient, slot.cost_per_g, prices) {
            cost += qty_g * cost_per_g;
        }
    }

    Estimate {
        co2e_kg: round2(emission),
        total_cost: round2(cost),
    }
}

/// Full result for one dish
pub fn estimate_dish(
    dish: &DishRecord,
    carbon: &CarbonReference,
    prices: &PriceReference,
    policy: &FlagPolicy,
) -> DishResult {
    let totals = estimate(dish, carbon, prices);
    let metrics = derive_metrics(dish.selling_price, totals.total_cost, totals.co2e_kg, policy);

    DishResult {
        name: dish.name.clone(),
        selling_price: dish.selling_price,
        estimated_co2e_kg: totals.co2e_kg,
        total_cost: totals.total_cost,
        margin_pct: metrics.margin_pct,
        profit: metrics.profit,
        co2e_per_profit: metrics.co2e_per_profit,
        flags: metrics.flags,
    }
}

/// Estimate every dish, preserving input order
pub fn estimate_menu(
    dishes: &[DishRecord],
    carbon: &CarbonReference,
    prices: &PriceReference,
    policy: &FlagPolicy,
) -> Vec<DishResult> {
    dishes
        .iter()
        .map(|dish| estimate_dish(dish, carbon, prices, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishFlag, IngredientSlot};

    fn carbon() -> CarbonReference {
        [
            ("Pasta".to_string(), 1.1),
            ("Beef Mince".to_string(), 27.0),
            ("Tofu".to_string(), 1.9),
        ]
        .into_iter()
        .collect()
    }

    fn prices(entries: &[(&str, f64)]) -> PriceReference {
        entries.iter().map(|(n, p)| (n.to_string(), *p)).collect()
    }

    #[test]
    fn test_pasta_bowl() {
        let dish = DishRecord::new("Pasta Bowl", 10.0).with_slot(IngredientSlot::new("Pasta", 200.0));
        let result = estimate_dish(&dish, &carbon(), &prices(&[("Pasta", 0.01)]), &FlagPolicy::default());

        assert_eq!(result.estimated_co2e_kg, 0.22);
        assert_eq!(result.total_cost, 2.0);
        assert_eq!(result.margin_pct, 80.0);
        assert_eq!(result.profit, 8.0);
        assert_eq!(result.co2e_per_profit, 0.03);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_beef_burger_without_price() {
        let dish = DishRecord::new("Beef Burger", 8.0).with_slot(IngredientSlot::new("Beef Mince", 150.0));
        let result = estimate_dish(&dish, &carbon(), &PriceReference::empty(), &FlagPolicy::default());

        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.estimated_co2e_kg, 4.05);
        assert_eq!(result.margin_pct, 100.0);
        assert!(result.has_flag(DishFlag::HighCo2));
        assert!(!result.has_flag(DishFlag::LowMargin));
    }

    #[test]
    fn test_unknown_ingredient_contributes_nothing() {
        let dish = DishRecord::new("Seitan Wrap", 7.0).with_slot(IngredientSlot::new("Seitan", 100.0));
        let totals = estimate(&dish, &carbon(), &prices(&[("Pasta", 0.01)]));
        assert_eq!(totals, Estimate { co2e_kg: 0.0, total_cost: 0.0 });
    }

    #[test]
    fn test_zero_selling_price_does_not_panic() {
        let dish = DishRecord::new("Freebie", 0.0)
            .with_slot(IngredientSlot::new("Pasta", 100.0).with_cost(0.01));
        let result = estimate_dish(&dish, &carbon(), &PriceReference::empty(), &FlagPolicy::default());
        assert_eq!(result.total_cost, 1.0);
        assert!(!result.margin_pct.is_finite());
    }

    #[test]
    fn test_explicit_and_reference_costs_per_slot() {
        let dish = DishRecord::new("Stir Fry", 12.0)
            .with_slot(IngredientSlot::new("Pasta", 100.0).with_cost(0.02))
            .with_slot(IngredientSlot::new("Tofu", 100.0));
        let totals = estimate(&dish, &carbon(), &prices(&[("Pasta", 0.5), ("Tofu", 0.05)]));
        // 100 * 0.02 + 100 * 0.05
        assert_eq!(totals.total_cost, 7.0);
    }

    #[test]
    fn test_cost_without_quantity_skipped() {
        let mut dish = DishRecord::new("Odd", 5.0);
        dish.slots[0] = IngredientSlot {
            ingredient: Some("Pasta".to_string()),
            quantity_g: None,
            cost_per_g: Some(1.0),
        };
        dish.slots[1] = IngredientSlot {
            ingredient: None,
            quantity_g: Some(100.0),
            cost_per_g: Some(1.0),
        };
        let totals = estimate(&dish, &carbon(), &PriceReference::empty());
        assert_eq!(totals, Estimate { co2e_kg: 0.0, total_cost: 0.0 });
    }

    #[test]
    fn test_negative_quantity_is_linear() {
        let dish = DishRecord::new("Refund", 5.0)
            .with_slot(IngredientSlot::new("Pasta", -1000.0).with_cost(0.01));
        let totals = estimate(&dish, &carbon(), &PriceReference::empty());
        assert_eq!(totals.co2e_kg, -1.1);
        assert_eq!(totals.total_cost, -10.0);
    }

    #[test]
    fn test_whitespace_in_name_is_trimmed() {
        let dish = DishRecord::new("Bowl", 10.0).with_slot(IngredientSlot::new(" Pasta ", 1000.0));
        let totals = estimate(&dish, &carbon(), &prices(&[("Pasta", 0.004)]));
        assert_eq!(totals.co2e_kg, 1.1);
        assert_eq!(totals.total_cost, 4.0);
    }

    #[test]
    fn test_exact_tie_totals_round_to_even() {
        let dish = DishRecord::new("Amuse", 10.125)
            .with_slot(IngredientSlot::new("Olive", 1.0).with_cost(0.125));
        let totals = estimate(&dish, &carbon(), &PriceReference::empty());
        assert_eq!(totals.total_cost, 0.12);

        let plain = DishRecord::new("Bread Basket", 10.125);
        let result = estimate_dish(&plain, &carbon(), &PriceReference::empty(), &FlagPolicy::default());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.profit, 10.12);
    }

    #[test]
    fn test_menu_preserves_order() {
        let dishes = vec![
            DishRecord::new("B", 5.0),
            DishRecord::new("A", 6.0),
            DishRecord::new("C", 7.0),
        ];
        let results = estimate_menu(&dishes, &carbon(), &PriceReference::empty(), &FlagPolicy::default());
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
