//! Presence checks and inline notices shared by every form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;

/// Inline message shown under a form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormNotice {
    Error(String),
    Success(String),
}

impl FormNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Notice for a failed request, prefixed with what was being attempted.
    pub fn from_api(action: &str, err: &ApiError) -> Self {
        Self::Error(format!("{action} failed: {err}"))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Error(m) | Self::Success(m) => m,
        }
    }
}

/// Trimmed value of a mandatory field.
///
/// # Errors
///
/// Returns `message` when the field is blank.
pub fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(message) } else { Ok(trimmed.to_owned()) }
}

/// Trimmed value of an optional field; blank means absent.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
