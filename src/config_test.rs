use super::*;

#[test]
fn defaults_apply_when_unset() {
    let config = AppConfig::from_values(None, None);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn api_base_trims_whitespace_and_trailing_slashes() {
    assert_eq!(parse_api_base(Some(" https://fund.example.org/api/ ")), "https://fund.example.org/api");
    assert_eq!(parse_api_base(Some("https://fund.example.org//")), "https://fund.example.org");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    assert_eq!(parse_api_base(Some("   ")), DEFAULT_API_BASE);
    assert_eq!(parse_api_base(Some("/")), DEFAULT_API_BASE);
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(parse_log_level(Some("DEBUG")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" warn ")), log::Level::Warn);
}

#[test]
fn unknown_log_level_uses_default() {
    assert_eq!(parse_log_level(Some("chatty")), DEFAULT_LOG_LEVEL);
}

#[test]
fn shared_config_is_built_once_from_env() {
    let first = get();
    assert!(std::ptr::eq(first, get()));
    assert_eq!(*first, AppConfig::from_env());
    assert_eq!(api_base(), first.api_base);
}
