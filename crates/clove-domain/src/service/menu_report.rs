//! Plain-text renderings of menu results

use chrono::NaiveDate;

use crate::model::{DishResult, MenuSummary};

use super::metrics::FlagPolicy;

const UNDEFINED: &str = "undefined";

/// Results table: one row per dish, in input order
pub fn generate_results_table(results: &[DishResult], currency: &str) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>10} {:>10}  {}\n",
        "Dish Name", "Price", "Cost", "Margin", "CO₂e (kg)", "Flag"
    ));
    table.push_str("-".repeat(88).as_str());
    table.push('\n');
    for r in results {
        table.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>10} {:>10}  {}\n",
            truncate_str(&r.name, 23),
            money(r.selling_price, currency),
            money(r.total_cost, currency),
            percent(r.margin_pct),
            number(r.estimated_co2e_kg),
            r.flag_label()
        ));
    }
    table
}

/// Full text report with summary and key observations
pub fn generate_menu_report(
    results: &[DishResult],
    summary: &MenuSummary,
    policy: &FlagPolicy,
    date: NaiveDate,
    currency: &str,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Clove Dish Analysis Report             \n");
    report.push_str("==================================================\n");
    report.push_str(&format!("Date: {}\n\n", date.format("%B %d, %Y")));

    report.push_str("[Summary]\n");
    report.push_str(&format!("  Dishes analyzed:      {}\n", summary.dish_count));
    report.push_str(&format!("  Average cost:         {}\n", money(summary.average_cost, currency)));
    report.push_str(&format!("  Average CO₂e:         {} kg\n", number(summary.average_co2e_kg)));
    report.push_str(&format!("  Total profit:         {}\n\n", money(summary.total_profit, currency)));

    report.push_str("[Dish Summary]\n");
    report.push_str(&generate_results_table(results, currency));
    report.push('\n');

    report.push_str("[Key Observations]\n");
    report.push_str(&format!(
        "  • {} dish(es) have a margin below {}%\n",
        summary.low_margin_count, policy.min_margin_pct
    ));
    report.push_str(&format!(
        "  • {} dish(es) exceed {}kg CO₂e emissions\n",
        summary.high_co2_count, policy.max_co2e_kg
    ));
    if !summary.high_impact.is_empty() {
        report.push_str(&format!(
            "  • High impact (above average cost and CO₂e): {}\n",
            summary.high_impact.join(", ")
        ));
    }
    report.push('\n');

    report.push_str("[Profit Share]\n");
    for share in &summary.profit_shares {
        report.push_str(&format!(
            "  {:<24} {:>10}\n",
            truncate_str(&share.name, 23),
            percent(share.share_pct.unwrap_or(f64::NAN))
        ));
    }
    report.push('\n');

    report.push_str("[Rankings]\n");
    let rankings = [
        ("By margin (high to low)", &summary.rankings.by_margin_desc),
        ("By CO₂e (high to low)", &summary.rankings.by_co2e_desc),
        ("By profit (low to high)", &summary.rankings.by_profit_asc),
        ("By CO₂e per profit (high to low)", &summary.rankings.by_co2e_per_profit_desc),
    ];
    for (label, names) in rankings {
        report.push_str(&format!("  {:<34} {}\n", label, names.join(" > ")));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}

fn money(value: f64, currency: &str) -> String {
    if value.is_finite() {
        format!("{}{:.2}", currency, value)
    } else {
        UNDEFINED.to_string()
    }
}

fn percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value)
    } else {
        UNDEFINED.to_string()
    }
}

fn number(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        UNDEFINED.to_string()
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
