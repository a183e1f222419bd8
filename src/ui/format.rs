//! Display formatting shared by the server-rendered rows and the tera filter

use std::collections::HashMap;
use tera::Value;

/// Format an amount as currency: `1234.5` → `$1,234.50`
///
/// Amounts too large to count in cents are written without grouping.
pub fn format_amount(amount: f64) -> String {
    let scaled = (amount.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}${:.2}", sign, amount.abs());
    }

    let cents = scaled as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Tera filter: `{{ invoice.amount | money }}`
pub fn money_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let amount = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("money filter expects a number, got {}", value)))?;
    Ok(Value::String(format_amount(amount)))
}
