//! End-to-end tests for the clove-dish-analyzer binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const DISHES_CSV: &str = "\
Dish Name,Selling Price (€),Ingredient 1,Qty 1 (g),Cost per g 1 (€),Ingredient 2,Qty 2 (g),Cost per g 2 (€),Ingredient 3,Qty 3 (g),Cost per g 3 (€)
Pasta Bowl,10.00,Pasta,200,,,,,,,
Beef Burger,8.00,Beef Mince,150,,,,,,,
Seitan Wrap,7.00,Seitan,100,,,,,,,
";

const PRICES_CSV: &str = "Ingredient,Price per g (€)\nPasta,0.01\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("dishes.csv"), DISHES_CSV).unwrap();
        std::fs::write(dir.path().join("prices.csv"), PRICES_CSV).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_clove-dish-analyzer"))
            .args(args)
            .env("CLOVE_CONFIG", self.path("config.json"))
            .env_remove("CLOVE_LOG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run binary")
    }
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_analyze_json_output() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "analyze",
        path_str(&ws.path("dishes.csv")),
        "--prices",
        path_str(&ws.path("prices.csv")),
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    let pasta = &entries[0]["result"];
    assert_eq!(pasta["name"], "Pasta Bowl");
    assert_eq!(pasta["total_cost"], 2.0);
    assert_eq!(pasta["estimated_co2e_kg"], 0.22);
    assert_eq!(pasta["margin_pct"], 80.0);
    assert_eq!(pasta["co2e_per_profit"], 0.03);

    let burger = &entries[1]["result"];
    assert_eq!(burger["estimated_co2e_kg"], 4.05);
    assert_eq!(burger["flags"], serde_json::json!(["HIGH_CO2"]));

    let seitan = &entries[2]["result"];
    assert_eq!(seitan["total_cost"], 0.0);
    assert_eq!(seitan["estimated_co2e_kg"], 0.0);
}

#[test]
fn test_analyze_table_output() {
    let ws = Workspace::new();
    let output = ws.run(&["analyze", path_str(&ws.path("dishes.csv"))]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clove Dish Analysis Report"));
    assert!(stdout.contains("Beef Burger"));
    assert!(stdout.contains("1 dish(es) exceed 3kg CO₂e emissions"));
}

#[test]
fn test_malformed_price_file_is_a_warning() {
    let ws = Workspace::new();
    std::fs::write(ws.path("bad_prices.csv"), "Name,Cost\nPasta,0.01\n").unwrap();
    let output = ws.run(&[
        "analyze",
        path_str(&ws.path("dishes.csv")),
        "--prices",
        path_str(&ws.path("bad_prices.csv")),
        "-f",
        "json",
    ]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: price reference"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["entries"][0]["result"]["total_cost"], 0.0);
    assert_eq!(json["diagnostics"].as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_dish_file_fails() {
    let ws = Workspace::new();
    let output = ws.run(&["analyze", path_str(&ws.path("nope.csv"))]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_analyze_then_export() {
    let ws = Workspace::new();
    let output = ws.run(&["analyze", path_str(&ws.path("dishes.csv")), "-f", "json"]);
    assert!(output.status.success());
    std::fs::write(ws.path("results.json"), &output.stdout).unwrap();

    let output = ws.run(&["export", path_str(&ws.path("results.json"))]);
    assert!(output.status.success());
    assert!(ws.path("results.xlsx").exists());
}

#[test]
fn test_template_round_trip() {
    let ws = Workspace::new();
    let template = ws.path("template.csv");
    let output = ws.run(&["template", "-o", path_str(&template)]);
    assert!(output.status.success());

    let header = std::fs::read_to_string(&template).unwrap();
    assert!(header.starts_with("Dish Name,Selling Price (€),Ingredient 1"));

    let output = ws.run(&["analyze", path_str(&template), "-f", "json"]);
    assert!(output.status.success());
}

#[test]
fn test_carbon_listing() {
    let ws = Workspace::new();
    let output = ws.run(&["carbon"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Beef Mince"));
    assert!(stdout.contains("23 ingredients"));
}

#[test]
fn test_config_set_output_format() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "--set-output", "json"]);
    assert!(output.status.success());

    let output = ws.run(&["analyze", path_str(&ws.path("dishes.csv"))]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["summary"]["dish_count"] == 3);
}
