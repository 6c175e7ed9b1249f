//! Dish input records

use serde::{Deserialize, Serialize};

/// Number of ingredient slots on a dish row
pub const SLOT_COUNT: usize = 3;

/// One ingredient/quantity/cost triple attached to a dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSlot {
    /// Ingredient name as entered (trimmed at lookup time)
    #[serde(default)]
    pub ingredient: Option<String>,
    /// Quantity in grams
    #[serde(default)]
    pub quantity_g: Option<f64>,
    /// Explicit cost per gram, overrides the price reference
    #[serde(default)]
    pub cost_per_g: Option<f64>,
}

impl IngredientSlot {
    pub fn new(ingredient: &str, quantity_g: f64) -> Self {
        Self {
            ingredient: Some(ingredient.to_string()),
            quantity_g: Some(quantity_g),
            cost_per_g: None,
        }
    }

    pub fn with_cost(mut self, cost_per_g: f64) -> Self {
        self.cost_per_g = Some(cost_per_g);
        self
    }

    /// Ingredient name and quantity when both are present.
    ///
    /// A slot missing either one contributes nothing, even if it carries a cost.
    pub fn active(&self) -> Option<(&str, f64)> {
        let name = self.ingredient.as_deref()?;
        let qty = self.quantity_g.filter(|q| !q.is_nan())?;
        Some((name.trim(), qty))
    }
}

/// A dish row: name, selling price, and up to three ingredient slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub name: String,
    pub selling_price: f64,
    #[serde(default)]
    pub slots: [IngredientSlot; SLOT_COUNT],
}

impl DishRecord {
    pub fn new(name: &str, selling_price: f64) -> Self {
        Self {
            name: name.to_string(),
            selling_price,
            slots: Default::default(),
        }
    }

    /// Fill the next empty slot. Extra slots beyond `SLOT_COUNT` are ignored.
    pub fn with_slot(mut self, slot: IngredientSlot) -> Self {
        if let Some(free) = self.slots.iter_mut().find(|s| **s == IngredientSlot::default()) {
            *free = slot;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_trims_name() {
        let slot = IngredientSlot::new("  Pasta ", 200.0);
        assert_eq!(slot.active(), Some(("Pasta", 200.0)));
    }

    #[test]
    fn test_cost_without_quantity_is_inactive() {
        let slot = IngredientSlot {
            ingredient: Some("Pasta".to_string()),
            quantity_g: None,
            cost_per_g: Some(0.01),
        };
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_nan_quantity_is_inactive() {
        let slot = IngredientSlot::new("Pasta", f64::NAN);
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_with_slot_fills_in_order() {
        let dish = DishRecord::new("Bowl", 9.0)
            .with_slot(IngredientSlot::new("Quinoa", 120.0))
            .with_slot(IngredientSlot::new("Avocado", 80.0));
        assert_eq!(dish.slots[0].ingredient.as_deref(), Some("Quinoa"));
        assert_eq!(dish.slots[1].ingredient.as_deref(), Some("Avocado"));
        assert_eq!(dish.slots[2], IngredientSlot::default());
    }
}
