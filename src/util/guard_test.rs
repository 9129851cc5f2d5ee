use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::session::{AuthBackend, CheckOutcome, SessionCell, check_auth_status};

const ADMIN_ONLY: &[Role] = &Role::ADMIN_TIER;
const MEMBER_ONLY: &[Role] = &Role::MEMBER_ONLY;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        role,
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.org".to_owned(),
        phone: None,
        member_number: None,
    }
}

fn loading_state() -> AuthState {
    let mut state = AuthState::default();
    state.begin_check();
    state
}

struct TestCell(RefCell<AuthState>);

impl SessionCell for TestCell {
    fn try_apply<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

struct FailingBackend;

impl AuthBackend for FailingBackend {
    fn current_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>> {
        std::future::ready(Err(ApiError::Network("connection refused".to_owned())))
    }
}

// =============================================================
// Phases
// =============================================================

#[test]
fn fresh_mount_is_unchecked_and_shows_loading() {
    let guard = RouteGuard::new(ADMIN_ONLY);
    let phase = guard.phase(&AuthState::default());
    assert_eq!(phase, GuardPhase::Unchecked);
    assert_eq!(phase.view(), GuardView::Loading);
}

#[test]
fn loading_renders_only_loading_even_if_authenticated() {
    let mut state = AuthState::signed_in(user(Role::SuperAdmin));
    state.is_loading = true;
    let guard = RouteGuard::new(ADMIN_ONLY);
    assert_eq!(guard.phase(&state), GuardPhase::Checking);
    assert_eq!(guard.phase(&state).view(), GuardView::Loading);
}

#[test]
fn roles_outside_allowed_set_always_redirect() {
    let route_sets: [&'static [Role]; 3] = [ADMIN_ONLY, MEMBER_ONLY, &[Role::SuperAdmin]];
    for allowed in route_sets {
        for role in Role::ALL.into_iter().filter(|r| !allowed.contains(r)) {
            let mut guard = RouteGuard::new(allowed);
            let state = AuthState::signed_in(user(role));
            guard.observe(&state);
            let view = guard.phase(&state).view();
            assert!(matches!(view, GuardView::Redirect(_)), "{role:?} on {allowed:?} rendered {view:?}");
        }
    }
}

#[test]
fn member_on_admin_route_redirects_to_member_home() {
    let guard = RouteGuard::new(ADMIN_ONLY);
    let phase = guard.phase(&AuthState::signed_in(user(Role::Member)));
    assert_eq!(phase, GuardPhase::WrongRole(Role::Member));
    assert_eq!(phase.view(), GuardView::Redirect("/"));
}

#[test]
fn admin_on_member_route_redirects_to_admin_home() {
    let guard = RouteGuard::new(MEMBER_ONLY);
    let phase = guard.phase(&AuthState::signed_in(user(Role::AdminLevel2)));
    assert_eq!(phase.view(), GuardView::Redirect("/admin"));
}

#[test]
fn super_admin_on_admin_route_renders_content() {
    let mut guard = RouteGuard::new(ADMIN_ONLY);
    let state = AuthState::signed_in(user(Role::SuperAdmin));
    assert!(!guard.observe(&state));
    assert_eq!(guard.phase(&state), GuardPhase::Authorized);
    assert_eq!(guard.phase(&state).view(), GuardView::Content);
}

#[test]
fn unauthenticated_on_admin_members_redirects_to_landing() {
    let mut guard = RouteGuard::new(ADMIN_ONLY);
    let cell = TestCell(RefCell::new(AuthState::default()));
    assert!(guard.observe(&cell.0.borrow()));
    let outcome = block_on(check_auth_status(&cell, &FailingBackend));
    assert_eq!(outcome, CheckOutcome::SignedOut);
    let state = cell.0.borrow().clone();
    assert_eq!(guard.phase(&state), GuardPhase::Unauthorized);
    assert_eq!(guard.phase(&state).view(), GuardView::Redirect("/landing"));
}

// =============================================================
// Once-per-mount checks
// =============================================================

#[test]
fn check_triggers_once_per_mount() {
    let mut guard = RouteGuard::new(MEMBER_ONLY);
    let state = AuthState::default();
    assert!(guard.observe(&state));
    assert!(!guard.observe(&state));
    assert!(!guard.observe(&loading_state()));
    assert!(!guard.observe(&state));
}

#[test]
fn remount_checks_again() {
    let state = AuthState::default();
    let mut first = RouteGuard::new(MEMBER_ONLY);
    assert!(first.observe(&state));
    let mut second = RouteGuard::new(MEMBER_ONLY);
    assert!(second.observe(&state));
}

#[test]
fn in_flight_check_from_another_guard_is_not_repeated() {
    let mut guard = RouteGuard::new(MEMBER_ONLY);
    assert!(!guard.observe(&loading_state()));
    let settled = AuthState::default();
    assert!(!guard.observe(&settled));
    assert_eq!(guard.phase(&settled), GuardPhase::Unauthorized);
}

#[test]
fn sign_out_after_authorized_mount_redirects_without_recheck() {
    let mut guard = RouteGuard::new(MEMBER_ONLY);
    let mut state = AuthState::signed_in(user(Role::Member));
    assert!(!guard.observe(&state));
    state.sign_out();
    assert!(!guard.observe(&state));
    assert_eq!(guard.phase(&state).view(), GuardView::Redirect("/landing"));
}

// =============================================================
// Default redirect resolver
// =============================================================

#[test]
fn default_route_waits_while_loading() {
    assert_eq!(resolve_default_route(&loading_state(), true), None);
}

#[test]
fn default_route_waits_for_first_check() {
    assert_eq!(resolve_default_route(&AuthState::default(), false), None);
}

#[test]
fn default_route_sends_signed_out_to_landing() {
    assert_eq!(resolve_default_route(&AuthState::default(), true), Some("/landing"));
}

#[test]
fn default_route_by_role() {
    for role in Role::ALL {
        let expected = if role == Role::Member { "/" } else { "/admin" };
        assert_eq!(resolve_default_route(&AuthState::signed_in(user(role)), false), Some(expected));
    }
}

#[test]
fn mount_check_reports_checked_after_first_observation() {
    let mut check = MountCheck::default();
    assert!(!check.has_checked());
    assert!(!check.observe(&AuthState::signed_in(user(Role::Member))));
    assert!(check.has_checked());
}
