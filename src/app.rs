//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::default_redirect::DefaultRedirect;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::{ChargeKind, Role};
use crate::pages::admin::{
    accounting::AccountingPage, charges::ChargesPage, dashboard::AdminDashboardPage, loans::LoanReviewPage,
    members::MembersPage,
};
use crate::pages::member::{
    contributions::ContributionsPage, dashboard::MemberDashboardPage, loans::LoansPage, payments::PaymentsPage,
};
use crate::pages::{landing::LandingPage, login::LoginPage, register::RegisterPage};
use crate::state::session::Session;

const MEMBER_ROLES: &[Role] = &Role::MEMBER_ONLY;
const ADMIN_ROLES: &[Role] = &Role::ADMIN_TIER;

/// Root application component.
///
/// Creates the session service, provides it to every route and declares
/// which roles each protected route admits.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::new());

    view! {
        <Title text="Memberfund"/>

        <Router>
            <Routes fallback=|| view! { <DefaultRedirect/> }>
                <Route path=StaticSegment("landing") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DefaultRedirect/>

                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute allowed_roles=MEMBER_ROLES><MemberDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("loans")
                    view=|| view! { <ProtectedRoute allowed_roles=MEMBER_ROLES><LoansPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("payments")
                    view=|| view! { <ProtectedRoute allowed_roles=MEMBER_ROLES><PaymentsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("contributions")
                    view=|| view! { <ProtectedRoute allowed_roles=MEMBER_ROLES><ContributionsPage/></ProtectedRoute> }
                />

                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ROLES><AdminDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("members"))
                    view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ROLES><MembersPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dues"))
                    view=|| {
                        view! {
                            <ProtectedRoute allowed_roles=ADMIN_ROLES>
                                <ChargesPage kind=ChargeKind::Due/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("levies"))
                    view=|| {
                        view! {
                            <ProtectedRoute allowed_roles=ADMIN_ROLES>
                                <ChargesPage kind=ChargeKind::Levy/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("loans"))
                    view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ROLES><LoanReviewPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("accounting"))
                    view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ROLES><AccountingPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
