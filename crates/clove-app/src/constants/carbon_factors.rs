//! Default emission factors, kg CO2e per kg of ingredient

use clove_domain::model::CarbonReference;
use std::sync::LazyLock;

const FACTORS: [(&str, f64); 23] = [
    ("Pasta", 1.1),
    ("Beef Mince", 27.0),
    ("Tomato Sauce", 2.5),
    ("Chicken Breast", 6.9),
    ("Lettuce", 0.8),
    ("Cucumber", 0.4),
    ("Chickpeas", 0.9),
    ("Tomato", 1.4),
    ("Coconut Milk", 2.9),
    ("White Fish", 5.5),
    ("Bun", 1.2),
    ("Tortilla", 1.0),
    ("Cheese", 13.5),
    ("Arborio Rice", 1.8),
    ("Mushrooms", 1.2),
    ("Parmesan", 10.0),
    ("Yogurt", 2.1),
    ("Quinoa", 1.5),
    ("Avocado", 2.2),
    ("Couscous", 1.7),
    ("Tofu", 1.9),
    ("Broccoli", 0.6),
    ("Soy Sauce", 3.2),
];

/// Built once per process, read-only afterwards
pub static DEFAULT_CARBON_REFERENCE: LazyLock<CarbonReference> = LazyLock::new(|| {
    FACTORS
        .iter()
        .map(|(name, factor)| (name.to_string(), *factor))
        .collect()
});

pub fn default_carbon_reference() -> &'static CarbonReference {
    &DEFAULT_CARBON_REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(default_carbon_reference().len(), 23);
    }

    #[test]
    fn test_known_factors() {
        let reference = default_carbon_reference();
        assert_eq!(reference.factor("Beef Mince"), 27.0);
        assert_eq!(reference.factor("Broccoli"), 0.6);
        assert_eq!(reference.factor("Seitan"), 0.0);
    }
}
