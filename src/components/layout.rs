//! Shared shell around every protected page: navigation, user and logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::routes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const MEMBER_NAV: &[NavItem] = &[
    NavItem { label: "Overview", href: routes::MEMBER_HOME },
    NavItem { label: "Loans", href: routes::MEMBER_LOANS },
    NavItem { label: "Payments", href: routes::MEMBER_PAYMENTS },
    NavItem { label: "Pledges & donations", href: routes::MEMBER_CONTRIBUTIONS },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: routes::ADMIN_HOME },
    NavItem { label: "Members", href: routes::ADMIN_MEMBERS },
    NavItem { label: "Dues", href: routes::ADMIN_DUES },
    NavItem { label: "Levies", href: routes::ADMIN_LEVIES },
    NavItem { label: "Loans", href: routes::ADMIN_LOANS },
    NavItem { label: "Accounting", href: routes::ADMIN_ACCOUNTING },
];

/// Navigation entries for a role.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    if role.is_admin_tier() { ADMIN_NAV } else { MEMBER_NAV }
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.state();

    let items = move || auth.get().role().map_or(&[][..], nav_items);
    let user_name = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();
    let role_label = move || auth.get().role().map(Role::label).unwrap_or_default();
    let on_logout = move |_| session.sign_out();

    view! {
        <div class="app-shell">
            <nav class="app-shell__nav">
                <span class="app-shell__brand">"Memberfund"</span>
                {move || {
                    items()
                        .iter()
                        .map(|item| view! { <A href=item.href>{item.label}</A> })
                        .collect_view()
                }}
            </nav>
            <div class="app-shell__main">
                <header class="app-shell__header">
                    <span class="app-shell__user">{user_name}</span>
                    <span class="app-shell__role">{role_label}</span>
                    <button class="btn app-shell__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
