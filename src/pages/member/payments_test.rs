use super::*;
use crate::net::types::ChargeStatus;

fn loan(id: &str, status: LoanStatus, balance: f64) -> Loan {
    Loan {
        id: id.to_owned(),
        member_id: "m1".to_owned(),
        member_name: None,
        amount: 1000.0,
        term_months: 12,
        purpose: "Roof".to_owned(),
        status,
        balance,
        created_at: "2026-01-01".to_owned(),
    }
}

fn charge(id: &str, amount: f64, paid: f64) -> MemberCharge {
    MemberCharge {
        id: id.to_owned(),
        charge_id: format!("c-{id}"),
        title: "Annual due".to_owned(),
        amount,
        amount_paid: paid,
        due_date: "2026-03-31".to_owned(),
        status: if paid >= amount { ChargeStatus::Paid } else { ChargeStatus::Unpaid },
    }
}

fn sources() -> PaymentSources {
    PaymentSources {
        loans: vec![
            loan("l1", LoanStatus::Disbursed, 400.0),
            loan("l2", LoanStatus::Pending, 1000.0),
            loan("l3", LoanStatus::Disbursed, 0.0),
        ],
        dues: vec![charge("d1", 50.0, 20.0), charge("d2", 50.0, 50.0)],
        levies: vec![charge("v1", 10.0, 0.0)],
        pledges: vec![
            Pledge {
                id: "p1".to_owned(),
                amount: 100.0,
                purpose: "Hall".to_owned(),
                fulfil_by: "2026-12-31".to_owned(),
                amount_fulfilled: 100.0,
            },
            Pledge {
                id: "p2".to_owned(),
                amount: 100.0,
                purpose: "Library".to_owned(),
                fulfil_by: "2026-12-31".to_owned(),
                amount_fulfilled: 25.0,
            },
        ],
    }
}

fn ids(kind: PaymentKind) -> Vec<String> {
    reference_options(kind, &sources()).into_iter().map(|(id, _)| id).collect()
}

#[test]
fn loan_options_are_disbursed_with_balance() {
    assert_eq!(ids(PaymentKind::LoanRepayment), vec!["l1"]);
}

#[test]
fn charge_options_skip_settled_items() {
    assert_eq!(ids(PaymentKind::Due), vec!["d1"]);
    assert_eq!(ids(PaymentKind::Levy), vec!["v1"]);
}

#[test]
fn pledge_options_skip_fulfilled_pledges() {
    assert_eq!(ids(PaymentKind::Pledge), vec!["p2"]);
}

#[test]
fn option_labels_show_what_is_owing() {
    let options = reference_options(PaymentKind::Due, &sources());
    assert_eq!(options[0].1, "Annual due (30.00 owing)");
}

#[test]
fn validate_payment_builds_request() {
    assert_eq!(
        validate_payment(PaymentKind::Levy, " v1 ", "10", "cash"),
        Ok(NewPayment {
            kind: PaymentKind::Levy,
            reference_id: "v1".to_owned(),
            amount: 10.0,
            method: PaymentMethod::Cash,
        })
    );
}

#[test]
fn validate_payment_reports_first_problem() {
    assert_eq!(validate_payment(PaymentKind::Due, "", "10", "cash"), Err("Choose what you are paying for."));
    assert_eq!(validate_payment(PaymentKind::Due, "d1", "abc", "cash"), Err("Enter a valid amount."));
    assert_eq!(validate_payment(PaymentKind::Due, "d1", "10", "cheque"), Err("Choose a payment method."));
}
