//! Application use cases

pub mod analysis_service;

pub use analysis_service::{
    analyze_menu, load_analysis, resolve_price_reference, save_analysis, AnalysisOptions,
};
