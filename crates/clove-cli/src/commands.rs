//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_analysis;
use clove_app::app::{analyze_menu, load_analysis, AnalysisOptions};
use clove_app::config::Config;
use clove_app::export::export_to_excel;
use clove_app::repository::{load_carbon_reference, open_dish_repo, open_price_repo};
use clove_domain::model::DishFlag;
use clove_infra::carbon_toml::carbon_reference_to_toml;
use clove_infra::template::write_dish_template;
use clove_types::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Analyze {
            dishes,
            prices,
            carbon,
            output,
        } => cmd_analyze(&config, dishes, prices, carbon, output, output_format),

        Commands::Export { results, output } => cmd_export(&config, results, output),

        Commands::Template { output } => cmd_template(&output),

        Commands::Carbon { carbon, toml } => cmd_carbon(&config, carbon, toml),

        Commands::Config {
            show,
            set_output,
            set_carbon,
            set_prices,
            set_currency,
            reset,
        } => cmd_config(show, set_output, set_carbon, set_prices, set_currency, reset),
    }
}

fn cmd_analyze(
    config: &Config,
    dishes_path: PathBuf,
    prices_path: Option<PathBuf>,
    carbon_path: Option<PathBuf>,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let dishes = open_dish_repo(dishes_path)?;
    let prices = open_price_repo(prices_path, config);
    let carbon = load_carbon_reference(carbon_path, config)?;
    let options = AnalysisOptions::new();

    let analysis = analyze_menu(&dishes, &carbon, &prices, &options)?;

    for diagnostic in &analysis.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    output_analysis(output_format, &analysis, &options.policy, config)?;

    if let Some(path) = output {
        export_to_excel(&analysis, &options.policy, &config.currency_symbol, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    let flagged = analysis
        .results()
        .filter(|r| r.has_flag(DishFlag::LowMargin) || r.has_flag(DishFlag::HighCo2))
        .count();
    if flagged > 0 {
        tracing::info!(flagged, "dishes flagged");
    }

    Ok(())
}

fn cmd_export(config: &Config, results_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !results_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Results file not found: {}",
            results_path.display()
        )));
    }
    let analysis = load_analysis(&results_path)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = results_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("results");
        results_path.with_file_name(format!("{}.xlsx", stem))
    });

    export_to_excel(
        &analysis,
        &AnalysisOptions::new().policy,
        &config.currency_symbol,
        &output_path,
    )?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_template(output: &Path) -> Result<()> {
    write_dish_template(output)?;
    println!("Template written to: {}", output.display());
    Ok(())
}

fn cmd_carbon(config: &Config, carbon_path: Option<PathBuf>, as_toml: bool) -> Result<()> {
    let reference = load_carbon_reference(carbon_path, config)?;

    if as_toml {
        print!("{}", carbon_reference_to_toml(&reference)?);
        return Ok(());
    }

    println!("{:<20} {:>14}", "Ingredient", "kg CO₂e / kg");
    println!("{}", "-".repeat(35));
    for (name, factor) in reference.entries() {
        println!("{:<20} {:>14.2}", name, factor);
    }
    println!("\n{} ingredients", reference.len());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_carbon: Option<PathBuf>,
    set_prices: Option<PathBuf>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_carbon {
        config.carbon_reference = Some(path);
        modified = true;
    }

    if let Some(path) = set_prices {
        config.price_reference = Some(path);
        modified = true;
    }

    if let Some(symbol) = set_currency {
        config.currency_symbol = symbol;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
