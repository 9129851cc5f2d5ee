use super::*;

#[test]
fn validate_application_builds_request() {
    assert_eq!(
        validate_application("1,500", " 24 ", "  School fees "),
        Ok(LoanApplication { amount: 1500.0, term_months: 24, purpose: "School fees".to_owned() })
    );
}

#[test]
fn validate_application_checks_amount_first() {
    assert_eq!(validate_application("", "", ""), Err("Enter an amount."));
    assert_eq!(validate_application("0", "12", "x"), Err("Amount must be greater than zero."));
}

#[test]
fn validate_application_bounds_term() {
    assert_eq!(validate_application("100", "", "x"), Err("Enter a repayment term."));
    assert_eq!(validate_application("100", "0", "x"), Err("Term must be between 1 and 60 months."));
    assert_eq!(validate_application("100", "61", "x"), Err("Term must be between 1 and 60 months."));
    assert_eq!(validate_application("100", "six", "x"), Err("Term must be between 1 and 60 months."));
    assert!(validate_application("100", "60", "x").is_ok());
    assert!(validate_application("100", "1", "x").is_ok());
}

#[test]
fn validate_application_requires_purpose() {
    assert_eq!(validate_application("100", "12", "  "), Err("Enter the purpose of the loan."));
}
