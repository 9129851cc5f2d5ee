use super::*;

fn sample_user_json(role: &str) -> String {
    format!(
        r#"{{"id":"u1","role":"{role}","first_name":"Ada","last_name":"Obi","email":"ada@example.org"}}"#
    )
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_into_data_returns_payload_on_success() {
    let env: ApiEnvelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
    assert_eq!(env.into_data(), Ok(7));
}

#[test]
fn envelope_into_data_rejects_with_server_message() {
    let env: ApiEnvelope<u32> =
        serde_json::from_str(r#"{"success":false,"message":"Insufficient balance"}"#).unwrap();
    assert_eq!(env.into_data(), Err(ApiError::Rejected("Insufficient balance".to_owned())));
}

#[test]
fn envelope_rejection_without_message_uses_generic_text() {
    let env: ApiEnvelope<u32> = serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
    assert_eq!(env.into_data(), Err(ApiError::Rejected("request was rejected".to_owned())));
}

#[test]
fn envelope_success_without_data_is_missing_data() {
    let env: ApiEnvelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert_eq!(env.into_data(), Err(ApiError::MissingData));
}

#[test]
fn envelope_ack_ignores_payload() {
    let env: ApiEnvelope<serde_json::Value> =
        serde_json::from_str(r#"{"success":true,"data":{"id":"x"},"message":"Saved"}"#).unwrap();
    assert_eq!(env.into_ack(), Ok(Some("Saved".to_owned())));
}

// =============================================================
// Roles
// =============================================================

#[test]
fn role_wire_names_use_numbered_snake_case() {
    let user: User = serde_json::from_str(&sample_user_json("admin_level_1")).unwrap();
    assert_eq!(user.role, Role::AdminLevel1);
    assert_eq!(serde_json::to_string(&Role::AdminLevel2).unwrap(), r#""admin_level_2""#);
    assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), r#""super_admin""#);
}

#[test]
fn unknown_role_fails_to_decode() {
    assert!(serde_json::from_str::<User>(&sample_user_json("treasurer")).is_err());
}

#[test]
fn as_str_matches_serde_for_every_role() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        assert_eq!(Role::from_wire(role.as_str()), Some(role));
    }
}

#[test]
fn only_member_is_outside_admin_tier() {
    let outside: Vec<Role> = Role::ALL.into_iter().filter(|r| !r.is_admin_tier()).collect();
    assert_eq!(outside, vec![Role::Member]);
}

// =============================================================
// Payload helpers
// =============================================================

#[test]
fn display_name_falls_back_to_email() {
    let mut user: User = serde_json::from_str(&sample_user_json("member")).unwrap();
    assert_eq!(user.display_name(), "Ada Obi");
    user.first_name = " ".to_owned();
    user.last_name = String::new();
    assert_eq!(user.display_name(), "ada@example.org");
}

#[test]
fn member_charge_outstanding_never_negative() {
    let charge = MemberCharge {
        id: "mc1".to_owned(),
        charge_id: "c1".to_owned(),
        title: "Annual due".to_owned(),
        amount: 100.0,
        amount_paid: 120.0,
        due_date: "2026-12-31".to_owned(),
        status: ChargeStatus::Paid,
    };
    assert!(charge.outstanding().abs() < f64::EPSILON);
}

#[test]
fn member_status_defaults_to_active_when_absent() {
    let member: Member = serde_json::from_str(
        r#"{"id":"m1","first_name":"Ada","last_name":"Obi","email":"a@b.org","role":"member"}"#,
    )
    .unwrap();
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.full_name(), "Ada Obi");
}

#[test]
fn loan_status_update_omits_empty_note() {
    let body = LoanStatusUpdate { status: LoanStatus::Approved, note: None };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"approved"}"#);
}

#[test]
fn payment_kind_wire_names_round_trip_through_from_wire() {
    for kind in PaymentKind::ALL {
        assert_eq!(PaymentKind::from_wire(kind.as_str()), Some(kind));
    }
    assert_eq!(PaymentKind::from_wire("refund"), None);
}
