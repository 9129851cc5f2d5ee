//! Route-guard state machine and default redirect resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` and `components::default_redirect` are thin
//! views over these functions; every routing decision is made here.
//!
//! States: `Unchecked -> Checking -> {Authorized, Unauthorized, WrongRole}`.
//! Only `Authorized` renders content. `Unchecked` and `Checking` render the
//! loading indicator, so protected content never shows before the first check
//! of a mount has settled.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    Unchecked,
    Checking,
    Authorized,
    Unauthorized,
    WrongRole(Role),
}

/// What a guard renders for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Content,
    Redirect(&'static str),
}

impl GuardPhase {
    pub fn view(self) -> GuardView {
        match self {
            Self::Unchecked | Self::Checking => GuardView::Loading,
            Self::Authorized => GuardView::Content,
            Self::Unauthorized => GuardView::Redirect(routes::LANDING),
            Self::WrongRole(role) => GuardView::Redirect(home_for_role(role)),
        }
    }
}

/// Once-per-mount auth check bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountCheck {
    has_checked: bool,
}

impl MountCheck {
    /// Feed the latest session state. Returns `true` exactly when this mount
    /// must trigger the session re-check.
    ///
    /// An authenticated session, or a check already in flight from another
    /// mount, counts as this mount's check.
    pub fn observe(&mut self, state: &AuthState) -> bool {
        if self.has_checked {
            return false;
        }
        self.has_checked = true;
        !state.is_authenticated && !state.is_loading
    }

    pub fn has_checked(self) -> bool {
        self.has_checked
    }
}

/// Guard for one mounted protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    allowed: &'static [Role],
    check: MountCheck,
}

impl RouteGuard {
    /// Fresh guard for one mount; starts `Unchecked`.
    pub fn new(allowed: &'static [Role]) -> Self {
        Self { allowed, check: MountCheck::default() }
    }

    /// See [`MountCheck::observe`].
    pub fn observe(&mut self, state: &AuthState) -> bool {
        self.check.observe(state)
    }

    pub fn phase(&self, state: &AuthState) -> GuardPhase {
        if state.is_loading {
            return GuardPhase::Checking;
        }
        match state.role() {
            Some(role) if self.allowed.contains(&role) => GuardPhase::Authorized,
            Some(role) => GuardPhase::WrongRole(role),
            None if self.check.has_checked() => GuardPhase::Unauthorized,
            None => GuardPhase::Unchecked,
        }
    }
}

/// Landing route for a signed-in role.
pub fn home_for_role(role: Role) -> &'static str {
    if role.is_admin_tier() { routes::ADMIN_HOME } else { routes::MEMBER_HOME }
}

/// Where an unqualified navigation should land. `None` while the session is
/// still undecided (loading, or not yet checked by this mount).
pub fn resolve_default_route(state: &AuthState, has_checked: bool) -> Option<&'static str> {
    if state.is_loading {
        return None;
    }
    match state.role() {
        Some(role) => Some(home_for_role(role)),
        None if has_checked => Some(routes::LANDING),
        None => None,
    }
}
