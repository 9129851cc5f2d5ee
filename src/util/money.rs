//! Amount parsing and display.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Parse a user-entered amount. Thousands separators are accepted; the value
/// is rounded to cents and must be positive.
///
/// # Errors
///
/// Returns the message to show next to the field.
pub fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err("Enter an amount.");
    }
    let Ok(value) = cleaned.parse::<f64>() else {
        return Err("Enter a valid amount.");
    };
    if !value.is_finite() {
        return Err("Enter a valid amount.");
    }
    let rounded = (value * 100.0).round() / 100.0;
    if !rounded.is_finite() {
        return Err("Enter a valid amount.");
    }
    if rounded <= 0.0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(rounded)
}

/// Format an amount with thousands separators and two decimals.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_owned();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{whole}.{:02}", cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
