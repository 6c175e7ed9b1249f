//! Header lookup and cell parsing shared by the CSV loaders

/// Index of the first header matching any of the accepted names
pub(crate) fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim_start_matches('\u{feff}').trim() == *n))
}

/// Trimmed cell text, `None` when the column is absent or the cell is blank
pub(crate) fn cell(record: &csv::StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse a finite numeric cell.
///
/// Commas are accepted only as thousands separators (`1,234.5`). A decimal
/// comma such as `0,01` is rejected rather than read as `1`.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let digits = if s.contains(',') {
        if !is_thousands_grouped(s) {
            return None;
        }
        s.replace(',', "")
    } else {
        s.to_string()
    };
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_thousands_grouped(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if fraction.contains(',') {
        return false;
    }
    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    leading_ok && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_column_with_bom() {
        let headers = csv::StringRecord::from(vec!["\u{feff}Dish Name", "Selling Price (€)"]);
        assert_eq!(find_column(&headers, &["Dish Name"]), Some(0));
        assert_eq!(find_column(&headers, &["Selling Price", "Selling Price (€)"]), Some(1));
        assert_eq!(find_column(&headers, &["Qty 1 (g)"]), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,234.5"), Some(1234.5));
        assert_eq!(parse_number(" 0.01 "), Some(0.01));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-12,000"), Some(-12000.0));
    }

    #[test]
    fn test_parse_number_rejects_decimal_comma() {
        assert_eq!(parse_number("0,01"), None);
        assert_eq!(parse_number("12,5"), None);
        assert_eq!(parse_number("1,23,456"), None);
        assert_eq!(parse_number("1.5,000"), None);
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-infinity"), None);
        assert_eq!(parse_number("1e999"), None);
    }
}
