//! Domain services

pub mod dish_estimator;
pub mod menu_report;
pub mod menu_summary;
pub mod metrics;
pub mod price_resolver;

pub use dish_estimator::{estimate, estimate_dish, estimate_menu, Estimate};
pub use menu_report::{generate_menu_report, generate_results_table};
pub use menu_summary::summarize;
pub use metrics::{derive_metrics, round2, DerivedMetrics, FlagPolicy};
pub use price_resolver::resolve_cost_per_gram;
