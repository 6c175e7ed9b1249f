//! Output formatting module

use chrono::Local;
use clove_app::config::Config;
use clove_domain::model::{DishResult, MenuAnalysis};
use clove_domain::service::{generate_menu_report, FlagPolicy};
use clove_types::{OutputFormat, Result};

pub fn output_analysis(
    output_format: OutputFormat,
    analysis: &MenuAnalysis,
    policy: &FlagPolicy,
    config: &Config,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(analysis)?;
            println!("{}", content);
        }
        OutputFormat::Table => {
            let results: Vec<DishResult> = analysis.results().cloned().collect();
            let report = generate_menu_report(
                &results,
                &analysis.summary,
                policy,
                Local::now().date_naive(),
                &config.currency_symbol,
            );
            println!("{}", report);
        }
    }

    Ok(())
}
