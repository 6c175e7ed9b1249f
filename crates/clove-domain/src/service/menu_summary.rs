//! Menu-wide observations over estimated dishes

use std::cmp::Ordering;

use crate::model::{DishFlag, DishResult, MenuSummary, ProfitShare, Rankings};

/// Summarize a set of dish results
pub fn summarize(results: &[DishResult]) -> MenuSummary {
    let dish_count = results.len();
    let low_margin_count = results.iter().filter(|r| r.has_flag(DishFlag::LowMargin)).count();
    let high_co2_count = results.iter().filter(|r| r.has_flag(DishFlag::HighCo2)).count();

    let average_cost = mean(results.iter().map(|r| r.total_cost));
    let average_co2e_kg = mean(results.iter().map(|r| r.estimated_co2e_kg));

    let high_impact = results
        .iter()
        .filter(|r| r.total_cost > average_cost && r.estimated_co2e_kg > average_co2e_kg)
        .map(|r| r.name.clone())
        .collect();

    let total_profit: f64 = results.iter().map(|r| r.profit).sum();
    let profit_shares = results
        .iter()
        .map(|r| ProfitShare {
            name: r.name.clone(),
            share_pct: if total_profit != 0.0 && total_profit.is_finite() {
                Some(r.profit / total_profit * 100.0)
            } else {
                None
            },
        })
        .collect();

    MenuSummary {
        dish_count,
        low_margin_count,
        high_co2_count,
        average_cost,
        average_co2e_kg,
        total_profit,
        high_impact,
        profit_shares,
        rankings: rank(results),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

fn rank(results: &[DishResult]) -> Rankings {
    Rankings {
        by_margin_desc: ranked(results, |r| r.margin_pct, true),
        by_co2e_desc: ranked(results, |r| r.estimated_co2e_kg, true),
        by_profit_asc: ranked(results, |r| r.profit, false),
        by_co2e_per_profit_desc: ranked(results, |r| r.co2e_per_profit, true),
    }
}

/// Stable sort by a metric. Non-finite values always go last.
fn ranked(results: &[DishResult], key: impl Fn(&DishResult) -> f64, descending: bool) -> Vec<String> {
    let mut sorted: Vec<&DishResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        let (ka, kb) = (key(a), key(b));
        match (ka.is_finite(), kb.is_finite()) {
            (true, true) => {
                let ord = ka.partial_cmp(&kb).unwrap_or(Ordering::Equal);
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    });
    sorted.into_iter().map(|r| r.name.clone()).collect()
}
