use super::*;

#[test]
fn required_trims_value() {
    assert_eq!(required("  Ada  ", "Enter a name."), Ok("Ada".to_owned()));
}

#[test]
fn required_rejects_blank() {
    assert_eq!(required(" \t ", "Enter a name."), Err("Enter a name."));
}

#[test]
fn optional_treats_blank_as_absent() {
    assert_eq!(optional("   "), None);
    assert_eq!(optional(" note "), Some("note".to_owned()));
}

#[test]
fn api_notice_includes_action_and_reason() {
    let notice = FormNotice::from_api("Loan application", &ApiError::Rejected("Limit exceeded".to_owned()));
    assert!(notice.is_error());
    assert_eq!(notice.text(), "Loan application failed: Limit exceeded");
}

#[test]
fn success_notice_is_not_error() {
    let notice = FormNotice::success("Saved.");
    assert!(!notice.is_error());
    assert_eq!(notice.text(), "Saved.");
}
