//! Session service: drives [`AuthState`] from the API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`Session`] and provides it through Leptos context; route
//! guards, the default redirect resolver, the login form and the layout shell
//! all reach the session through that handle instead of a global.
//!
//! DESIGN
//! ======
//! The check is split into a synchronous start (flips `is_loading` before the
//! caller re-renders) and an async completion. Both halves go through
//! [`SessionCell`] and the network through [`AuthBackend`], so the state
//! machine runs on the host with fakes. A result that arrives after the
//! session was disposed or superseded is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use super::auth::{AuthState, CheckToken};
use crate::net::error::ApiError;
use crate::net::types::{AuthPayload, User};

/// Source of the current user for an auth check.
pub trait AuthBackend {
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>>;
}

/// Backend that asks the API's `/auth/me`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiAuthBackend;

impl AuthBackend for ApiAuthBackend {
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>> {
        crate::net::api::fetch_current_user()
    }
}

/// Mutable home of an [`AuthState`].
pub trait SessionCell {
    /// Run `f` against the state; `None` when the storage no longer exists.
    fn try_apply<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<AuthState> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How a call to [`check_auth_status`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Already authenticated or another check is in flight.
    Skipped,
    Authenticated,
    SignedOut,
    /// The session moved on while the request was in flight.
    Stale,
}

/// Start a check if none is needed elsewhere. Synchronous so `is_loading` is
/// visible before the next render.
pub fn start_check<C: SessionCell>(cell: &C) -> Option<CheckToken> {
    let token = cell.try_apply(AuthState::begin_check).flatten();
    if token.is_some() {
        log::debug!("auth check started");
    }
    token
}

/// Fetch the current user and land the result for `token`.
pub async fn complete_check<C, B>(cell: &C, backend: &B, token: CheckToken) -> CheckOutcome
where
    C: SessionCell,
    B: AuthBackend,
{
    let result = backend.current_user().await;
    let authenticated = result.is_ok();
    if let Err(e) = &result {
        log::info!("auth check failed, treating session as signed out: {e}");
    }
    match cell.try_apply(|state| state.finish_check(token, result)) {
        Some(true) if authenticated => CheckOutcome::Authenticated,
        Some(true) => CheckOutcome::SignedOut,
        _ => {
            log::debug!("discarding stale auth check result");
            CheckOutcome::Stale
        }
    }
}

/// Re-check the session. A no-op when already authenticated or loading.
pub async fn check_auth_status<C, B>(cell: &C, backend: &B) -> CheckOutcome
where
    C: SessionCell,
    B: AuthBackend,
{
    match start_check(cell) {
        Some(token) => complete_check(cell, backend, token).await,
        None => CheckOutcome::Skipped,
    }
}

/// Context-provided handle to the session.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Reactive read access for views and guards.
    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Idempotent session refresh against the API.
    pub fn refresh(self) {
        let Some(token) = start_check(&self.state) else {
            return;
        };
        #[cfg(feature = "csr")]
        crate::util::task::spawn(async move {
            complete_check(&self.state, &ApiAuthBackend, token).await;
        });
        // No event loop to finish the request on: settle as signed out.
        #[cfg(not(feature = "csr"))]
        self.state.try_apply(|s| s.finish_check(token, Err(ApiError::Unavailable)));
    }

    /// Adopt the result of a successful login.
    pub fn sign_in(self, payload: AuthPayload) {
        log::info!("signed in as {} ({})", payload.user.id, payload.user.role.as_str());
        crate::net::credentials::store_token(&payload.token);
        self.state.try_apply(|s| s.sign_in(payload.user));
    }

    /// Clear the session locally and end it on the server.
    pub fn sign_out(self) {
        log::info!("signing out");
        self.state.try_apply(AuthState::sign_out);
        // The request still carries the token; `logout` forgets it afterwards.
        crate::util::task::spawn(async {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("server logout failed: {e}");
            }
        });
    }
}
