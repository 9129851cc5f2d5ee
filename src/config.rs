//! Client configuration baked in at compile time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the bundle is built:
//!
//! - `MEMBERFUND_API_BASE`: API base URL, default `/api`
//! - `MEMBERFUND_LOG`: console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Build the config from the variables captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("MEMBERFUND_API_BASE"), option_env!("MEMBERFUND_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base: parse_api_base(api_base), log_level: parse_log_level(log_level) }
    }
}

/// Process-wide config, built from the compile-time environment on first use.
pub fn get() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(AppConfig::from_env)
}

/// Base URL used by every API request.
pub fn api_base() -> &'static str {
    &get().api_base
}

fn parse_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
