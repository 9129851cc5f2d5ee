//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards, the default redirect resolver and user-aware
//! components; written only through the transitions below.
//!
//! DESIGN
//! ======
//! Every transition bumps a monotonic sequence. An auth check carries the
//! token it was issued and only lands if no newer transition happened while
//! it was in flight, so a sign-out racing a slow `/auth/me` always wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{Role, User};

/// Ticket for one in-flight auth check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckToken(u64);

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    seq: u64,
}

impl AuthState {
    /// State of a session that already holds `user`.
    pub fn signed_in(user: User) -> Self {
        let mut state = Self::default();
        state.sign_in(user);
        state
    }

    /// Role of the authenticated user; `None` when signed out.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated {
            return None;
        }
        self.user.as_ref().map(|u| u.role)
    }

    /// Start an auth check.
    ///
    /// Returns `None` (no-op) when already authenticated or a check is
    /// already in flight.
    pub fn begin_check(&mut self) -> Option<CheckToken> {
        if self.is_authenticated || self.is_loading {
            return None;
        }
        self.seq += 1;
        self.is_loading = true;
        Some(CheckToken(self.seq))
    }

    /// Apply the result of the check identified by `token`.
    ///
    /// Any error counts as signed out. Returns `false` when the token is
    /// stale and the result was discarded.
    pub fn finish_check(&mut self, token: CheckToken, result: Result<User, ApiError>) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.is_authenticated = true;
            }
            Err(_) => {
                self.user = None;
                self.is_authenticated = false;
            }
        }
        true
    }

    /// Record a user established by the login form.
    pub fn sign_in(&mut self, user: User) {
        self.seq += 1;
        self.user = Some(user);
        self.is_authenticated = true;
        self.is_loading = false;
    }

    /// Drop the user, invalidating any check still in flight.
    pub fn sign_out(&mut self) {
        self.seq += 1;
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
    }
}
