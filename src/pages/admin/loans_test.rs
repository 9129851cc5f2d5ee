use super::*;

#[test]
fn pending_loans_can_be_approved_or_rejected() {
    assert_eq!(next_actions(LoanStatus::Pending), &[LoanStatus::Approved, LoanStatus::Rejected]);
}

#[test]
fn approved_loans_can_only_be_disbursed() {
    assert_eq!(next_actions(LoanStatus::Approved), &[LoanStatus::Disbursed]);
}

#[test]
fn settled_loans_have_no_actions() {
    for status in [LoanStatus::Rejected, LoanStatus::Disbursed, LoanStatus::Repaid] {
        assert!(next_actions(status).is_empty(), "{status:?}");
    }
}

#[test]
fn action_labels_are_verbs() {
    assert_eq!(action_label(LoanStatus::Approved), "Approve");
    assert_eq!(action_label(LoanStatus::Rejected), "Reject");
    assert_eq!(action_label(LoanStatus::Disbursed), "Disburse");
}

#[test]
fn replace_loan_swaps_matching_row_only() {
    let loan = |id: &str, status| Loan {
        id: id.to_owned(),
        member_id: "m1".to_owned(),
        member_name: None,
        amount: 100.0,
        term_months: 6,
        purpose: "Tools".to_owned(),
        status,
        balance: 0.0,
        created_at: "2026-01-01".to_owned(),
    };
    let mut loans = vec![loan("a", LoanStatus::Pending), loan("b", LoanStatus::Pending)];
    replace_loan(&mut loans, loan("b", LoanStatus::Approved));
    replace_loan(&mut loans, loan("zzz", LoanStatus::Rejected));
    assert_eq!(loans[0].status, LoanStatus::Pending);
    assert_eq!(loans[1].status, LoanStatus::Approved);
    assert_eq!(loans.len(), 2);
}
