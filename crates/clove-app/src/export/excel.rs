//! Excel export functionality

use clove_domain::model::{MenuAnalysis, SLOT_COUNT};
use clove_domain::service::FlagPolicy;
use clove_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const UNDEFINED: &str = "undefined";

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export an analysis to an Excel file
///
/// `currency` labels the money columns, e.g. `€`.
pub fn export_to_excel(
    analysis: &MenuAnalysis,
    policy: &FlagPolicy,
    currency: &str,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, analysis, currency)?;

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, analysis, policy, currency)?;

    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(path = %output_path.display(), "wrote Excel report");

    Ok(())
}

/// Write a metric, or the text `undefined` when it is not finite
fn write_metric(sheet: &mut Worksheet, row: u32, col: u16, value: f64) -> Result<()> {
    if value.is_finite() {
        sheet.write_number(row, col, value).map_err(excel_err)?;
    } else {
        sheet.write_string(row, col, UNDEFINED).map_err(excel_err)?;
    }
    Ok(())
}

/// Column headers of the details sheet, money columns labelled with `currency`
fn details_headers(currency: &str) -> Vec<String> {
    let mut headers = vec!["Dish Name".to_string(), format!("Selling Price ({})", currency)];
    for slot in 1..=SLOT_COUNT {
        headers.push(format!("Ingredient {}", slot));
        headers.push(format!("Qty {} (g)", slot));
        headers.push(format!("Cost per g {} ({})", slot, currency));
    }
    headers.extend([
        "Estimated CO₂e (kg)".to_string(),
        format!("Total Cost ({})", currency),
        "Margin (%)".to_string(),
        format!("Profit ({})", currency),
        format!("CO₂e per {} profit", currency),
        "Flag".to_string(),
    ]);
    headers
}

fn write_details_sheet(sheet: &mut Worksheet, analysis: &MenuAnalysis, currency: &str) -> Result<()> {
    sheet.set_name("Dish Analysis").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    let headers = details_headers(currency);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, entry) in analysis.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let record = &entry.record;
        let result = &entry.result;

        sheet.write_string(row, 0, &record.name).map_err(excel_err)?;
        write_metric(sheet, row, 1, record.selling_price)?;

        let mut col: u16 = 2;
        for slot in &record.slots {
            if let Some(ref ingredient) = slot.ingredient {
                sheet.write_string(row, col, ingredient).map_err(excel_err)?;
            }
            if let Some(qty) = slot.quantity_g {
                write_metric(sheet, row, col + 1, qty)?;
            }
            if let Some(cost) = slot.cost_per_g {
                write_metric(sheet, row, col + 2, cost)?;
            }
            col += 3;
        }

        write_metric(sheet, row, col, result.estimated_co2e_kg)?;
        write_metric(sheet, row, col + 1, result.total_cost)?;
        write_metric(sheet, row, col + 2, result.margin_pct)?;
        write_metric(sheet, row, col + 3, result.profit)?;
        write_metric(sheet, row, col + 4, result.co2e_per_profit)?;
        sheet
            .write_string(row, col + 5, &result.flag_label())
            .map_err(excel_err)?;
    }

    sheet.set_column_width(0, 28).map_err(excel_err)?;
    let flag_col = (headers.len() - 1) as u16;
    sheet.set_column_width(flag_col, 24).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    analysis: &MenuAnalysis,
    policy: &FlagPolicy,
    currency: &str,
) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let summary = &analysis.summary;

    sheet
        .write_string_with_format(0, 0, "Clove Dish Analysis Report", &header_format)
        .map_err(excel_err)?;

    sheet.write_string(2, 0, "Analysis Date:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, analysis.generated_at.format("%B %d, %Y").to_string())
        .map_err(excel_err)?;

    let rows = [
        ("Dishes:".to_string(), summary.dish_count as f64),
        ("Low margin:".to_string(), summary.low_margin_count as f64),
        ("High CO₂e:".to_string(), summary.high_co2_count as f64),
        (format!("Average cost ({}):", currency), summary.average_cost),
        ("Average CO₂e (kg):".to_string(), summary.average_co2e_kg),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let row = 3 + i as u32;
        sheet.write_string(row, 0, label).map_err(excel_err)?;
        write_metric(sheet, row, 1, *value)?;
    }

    sheet
        .write_string_with_format(9, 0, "Key Observations", &header_format)
        .map_err(excel_err)?;
    sheet
        .write_string(
            10,
            0,
            format!(
                "{} dish(es) have a margin below {}%",
                summary.low_margin_count, policy.min_margin_pct
            ),
        )
        .map_err(excel_err)?;
    sheet
        .write_string(
            11,
            0,
            format!(
                "{} dish(es) exceed {}kg CO₂e emissions",
                summary.high_co2_count, policy.max_co2e_kg
            ),
        )
        .map_err(excel_err)?;

    let mut row = 13;
    sheet
        .write_string_with_format(row, 0, "Profit Share", &header_format)
        .map_err(excel_err)?;
    sheet
        .write_string_with_format(row, 1, "Share (%)", &header_format)
        .map_err(excel_err)?;
    for share in &summary.profit_shares {
        row += 1;
        sheet.write_string(row, 0, &share.name).map_err(excel_err)?;
        write_metric(sheet, row, 1, share.share_pct.unwrap_or(f64::NAN))?;
    }

    row += 2;
    sheet
        .write_string_with_format(row, 0, "Rankings", &header_format)
        .map_err(excel_err)?;
    let rankings = [
        ("By margin (high to low)", &summary.rankings.by_margin_desc),
        ("By CO₂e (high to low)", &summary.rankings.by_co2e_desc),
        ("By profit (low to high)", &summary.rankings.by_profit_asc),
        ("By CO₂e per profit (high to low)", &summary.rankings.by_co2e_per_profit_desc),
    ];
    for (label, names) in rankings {
        row += 1;
        sheet.write_string(row, 0, label).map_err(excel_err)?;
        sheet.write_string(row, 1, names.join(", ")).map_err(excel_err)?;
    }

    row += 2;
    if !analysis.diagnostics.is_empty() {
        sheet
            .write_string_with_format(row, 0, "Warnings", &header_format)
            .map_err(excel_err)?;
        for diagnostic in &analysis.diagnostics {
            row += 1;
            sheet
                .write_string(row, 0, diagnostic.to_string())
                .map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 40).map_err(excel_err)?;

    Ok(())
}
