//! Text rendering for REPL output.

use stockbook_core::OrderReportRow;

/// Separator between orders table columns.
const COLUMN_SEPARATOR: &str = " | ";

/// Renders a float with at least one decimal (`15.0`, `2.5`).
///
/// Magnitudes at or above `1e16` or below `1e-4` switch to exponent form
/// with a signed, at least two-digit exponent (`1e+16`, `2.5e-05`).
pub fn float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Renders an optional float, `None` when absent.
pub fn optional_float(value: Option<f64>) -> String {
    value.map(float).unwrap_or_else(|| "None".to_string())
}

/// Renders an optional name, `None` when absent.
pub fn optional_text(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}

/// Header line of the orders table.
pub fn orders_header() -> String {
    OrderReportRow::HEADERS.join(COLUMN_SEPARATOR)
}

/// One line of the orders table.
pub fn orders_row(row: &OrderReportRow) -> String {
    [
        row.product_id.clone(),
        row.product_name.clone(),
        row.quantity.to_string(),
        optional_float(row.price),
        optional_float(row.cogs),
        optional_float(row.selling_price),
    ]
    .join(COLUMN_SEPARATOR)
}
