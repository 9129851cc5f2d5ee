//! Bearer-token store for API requests.
//!
//! The token returned by login is the only credential the client keeps; the
//! session layer never touches storage directly.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::util::storage;

const TOKEN_KEY: &str = "memberfund_token";

/// Persist the token issued by a successful login.
pub fn store_token(token: &str) {
    storage::save_json(TOKEN_KEY, &token);
}

/// Forget the stored token (logout or rejected credentials).
pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// The `Authorization` header value for the stored token, if any.
pub fn authorization_header() -> Option<String> {
    storage::load_json::<String>(TOKEN_KEY).and_then(|t| bearer_value(&t))
}

fn bearer_value(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}
