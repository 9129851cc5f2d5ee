use super::*;

#[test]
fn pledge_requires_every_field() {
    assert_eq!(validate_pledge("", "Hall", "2026-12-31"), Err("Enter an amount."));
    assert_eq!(validate_pledge("100", " ", "2026-12-31"), Err("Enter what the pledge is for."));
    assert_eq!(validate_pledge("100", "Hall", ""), Err("Choose a fulfilment date."));
    assert_eq!(
        validate_pledge("100", " Hall ", "2026-12-31"),
        Ok(NewPledge { amount: 100.0, purpose: "Hall".to_owned(), fulfil_by: "2026-12-31".to_owned() })
    );
}

#[test]
fn donation_note_is_optional() {
    assert_eq!(
        validate_donation("25.50", "Welfare", "   "),
        Ok(NewDonation { amount: 25.5, cause: "Welfare".to_owned(), note: None })
    );
    assert_eq!(validate_donation("25", "Welfare", " In memory ").map(|d| d.note), Ok(Some("In memory".to_owned())));
}

#[test]
fn donation_requires_cause() {
    assert_eq!(validate_donation("25", "", ""), Err("Enter a cause."));
}
