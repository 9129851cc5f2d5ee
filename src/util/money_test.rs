use super::*;

#[test]
fn parse_amount_accepts_separators_and_whitespace() {
    assert_eq!(parse_amount(" 12,500.75 "), Ok(12_500.75));
}

#[test]
fn parse_amount_rounds_to_cents() {
    assert_eq!(parse_amount("10.006"), Ok(10.01));
    assert_eq!(parse_amount("3"), Ok(3.0));
}

#[test]
fn parse_amount_requires_value() {
    assert_eq!(parse_amount("   "), Err("Enter an amount."));
}

#[test]
fn parse_amount_rejects_garbage_and_non_finite() {
    assert_eq!(parse_amount("ten"), Err("Enter a valid amount."));
    assert_eq!(parse_amount("inf"), Err("Enter a valid amount."));
    assert_eq!(parse_amount("NaN"), Err("Enter a valid amount."));
    assert_eq!(parse_amount("1e308"), Err("Enter a valid amount."));
    assert_eq!(parse_amount("5e306"), Err("Enter a valid amount."));
}

#[test]
fn parsed_amounts_serialize_as_numbers() {
    let amount = parse_amount("1e300").unwrap();
    assert!(amount.is_finite());
    assert_eq!(serde_json::json!({ "amount": amount })["amount"].as_f64(), Some(amount));
}

#[test]
fn parse_amount_rejects_zero_and_negative() {
    assert_eq!(parse_amount("0"), Err("Amount must be greater than zero."));
    assert_eq!(parse_amount("0.001"), Err("Amount must be greater than zero."));
    assert_eq!(parse_amount("-5"), Err("Amount must be greater than zero."));
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(999.5), "999.50");
    assert_eq!(format_amount(1_000.0), "1,000.00");
    assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
}

#[test]
fn format_amount_keeps_sign_for_negative_balances() {
    assert_eq!(format_amount(-2_500.0), "-2,500.00");
    assert_eq!(format_amount(-0.001), "0.00");
}
