use super::*;

#[test]
fn bearer_value_prefixes_scheme() {
    assert_eq!(bearer_value("abc.def"), Some("Bearer abc.def".to_owned()));
}

#[test]
fn bearer_value_trims_and_rejects_blank_tokens() {
    assert_eq!(bearer_value("  tok  "), Some("Bearer tok".to_owned()));
    assert_eq!(bearer_value("   "), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn authorization_header_is_absent_outside_browser() {
    store_token("abc");
    assert_eq!(authorization_header(), None);
    clear_token();
}
