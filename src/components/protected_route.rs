//! Route wrapper that gates content on session role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped around every member and admin page in `app`. The decision logic is
//! `util::guard::RouteGuard`; this component only feeds it session state,
//! triggers the once-per-mount check and renders the resulting view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use super::layout::AppLayout;
use super::loading::LoadingScreen;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::guard::{GuardView, RouteGuard};

/// Renders `children` inside the layout shell only for `allowed_roles`.
#[component]
pub fn ProtectedRoute(allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.state();
    let guard = RwSignal::new(RouteGuard::new(allowed_roles));

    Effect::new(move || {
        let state = auth.get();
        if guard.try_update(|g| g.observe(&state)).unwrap_or(false) {
            session.refresh();
        }
    });

    let guard_view = Memo::new(move |_| {
        let state = auth.get();
        guard.with(|g| g.phase(&state)).view()
    });

    move || match guard_view.get() {
        GuardView::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardView::Redirect(path) => {
            log::debug!("route guard redirecting to {path}");
            view! { <Redirect path=path/> }.into_any()
        }
        GuardView::Content => {
            let children = children.clone();
            view! { <AppLayout>{children()}</AppLayout> }.into_any()
        }
    }
}
