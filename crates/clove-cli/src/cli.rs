//! CLI definition using clap

use clap::{Parser, Subcommand};
use clove_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clove-dish-analyzer")]
#[command(version)]
#[command(about = "Dish cost, margin, and CO2e estimation with policy flags")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging to stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a dish table
    Analyze {
        /// Path to dish CSV file
        dishes: PathBuf,

        /// Ingredient price CSV (Ingredient, Price per g (€))
        #[arg(long, short = 'p')]
        prices: Option<PathBuf>,

        /// Carbon reference TOML overriding the built-in table
        #[arg(long, short = 'c')]
        carbon: Option<PathBuf>,

        /// Also write an Excel report to this path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export a JSON results file to Excel
    Export {
        /// Path to JSON results file (from `analyze --format json`)
        results: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write a blank dish CSV template
    Template {
        /// Output path
        #[arg(long, short = 'o', default_value = "clove_dish_template.csv")]
        output: PathBuf,
    },

    /// Show the active carbon reference
    Carbon {
        /// Carbon reference TOML to show instead of the configured one
        #[arg(long, short = 'c')]
        carbon: Option<PathBuf>,

        /// Print as TOML, usable as an override file
        #[arg(long)]
        toml: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set carbon reference TOML path
        #[arg(long)]
        set_carbon: Option<PathBuf>,

        /// Set default price reference CSV path
        #[arg(long)]
        set_prices: Option<PathBuf>,

        /// Set currency symbol for reports
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
