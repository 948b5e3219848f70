pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a leaf value for display. Decimal values travel as strings at
/// full precision and are rounded only here: currency to 2 places, rates
/// and percentages to 4.
pub(crate) fn display_value(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => match Decimal::from_str(s) {
            Ok(d) => round_for_key(key, d).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn round_for_key(key: &str, value: Decimal) -> Decimal {
    let rate_like =
        key == "apr" || key.contains("rate") || key.contains("yield") || key.contains("percent");
    if rate_like {
        value.round_dp(4)
    } else {
        value.round_dp(2)
    }
}
