use super::*;

fn complete() -> RegisterDraft {
    RegisterDraft {
        first_name: " Ada ".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.org".to_owned(),
        phone: "+2348000000000".to_owned(),
        password: "hunter22".to_owned(),
        confirm: "hunter22".to_owned(),
    }
}

#[test]
fn complete_draft_builds_request() {
    let request = complete().to_request().unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.password, "hunter22");
}

#[test]
fn each_field_is_required_in_order() {
    let mut draft = complete();
    draft.phone.clear();
    assert_eq!(draft.to_request(), Err("Enter your phone number."));
    draft.first_name.clear();
    assert_eq!(draft.to_request(), Err("Enter your first name."));
}

#[test]
fn password_confirmation_must_match() {
    let mut draft = complete();
    draft.confirm = "hunter23".to_owned();
    assert_eq!(draft.to_request(), Err("Passwords do not match."));
    draft.password.clear();
    assert_eq!(draft.to_request(), Err("Choose a password."));
}
