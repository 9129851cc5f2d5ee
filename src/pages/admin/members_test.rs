use super::*;

fn member(id: &str, first: &str, email: &str, number: Option<&str>) -> Member {
    Member {
        id: id.to_owned(),
        first_name: first.to_owned(),
        last_name: "Okafor".to_owned(),
        email: email.to_owned(),
        phone: None,
        member_number: number.map(str::to_owned),
        role: Role::Member,
        status: MemberStatus::Active,
    }
}

fn roster() -> Vec<Member> {
    vec![
        member("1", "Ngozi", "ngozi@example.org", Some("MF-001")),
        member("2", "Emeka", "emeka@example.org", Some("MF-002")),
        member("3", "Ada", "ada@mail.test", None),
    ]
}

fn ids(found: Vec<&Member>) -> Vec<&str> {
    found.into_iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn blank_query_lists_everyone() {
    let roster = roster();
    assert_eq!(ids(filter_members(&roster, "  ")), vec!["1", "2", "3"]);
}

#[test]
fn query_matches_name_email_or_number_case_insensitively() {
    let roster = roster();
    assert_eq!(ids(filter_members(&roster, "EMEKA")), vec!["2"]);
    assert_eq!(ids(filter_members(&roster, "mail.test")), vec!["3"]);
    assert_eq!(ids(filter_members(&roster, "mf-001")), vec!["1"]);
    assert_eq!(ids(filter_members(&roster, "okafor")), vec!["1", "2", "3"]);
    assert!(filter_members(&roster, "zzz").is_empty());
}

#[test]
fn only_super_admin_assigns_roles() {
    assert!(can_assign_roles(Some(Role::SuperAdmin)));
    for role in [Role::Member, Role::Admin, Role::AdminLevel1, Role::AdminLevel2] {
        assert!(!can_assign_roles(Some(role)), "{role:?}");
    }
    assert!(!can_assign_roles(None));
}

#[test]
fn new_member_requires_every_field() {
    let mut draft = MemberDraft {
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.org".to_owned(),
        phone: String::new(),
    };
    assert_eq!(validate_new_member(&draft), Err("Enter a phone number."));
    draft.phone = " 0800 ".to_owned();
    let body = validate_new_member(&draft).unwrap();
    assert_eq!(body.phone, "0800");
    assert_eq!(body.role, Role::Member);
}

#[test]
fn status_toggle_flips() {
    assert_eq!(toggled(MemberStatus::Active), MemberStatus::Inactive);
    assert_eq!(toggled(MemberStatus::Inactive), MemberStatus::Active);
}
