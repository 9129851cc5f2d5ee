//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;
use crate::util::routes;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<Session>().state();

    view! {
        <div class="landing-page">
            <h1>"Memberfund"</h1>
            <p>"Loans, dues, levies, pledges and donations for your association in one place."</p>
            <Show
                when=move || auth.get().is_authenticated
                fallback=|| {
                    view! {
                        <div class="landing-page__actions">
                            <A href=routes::LOGIN>"Sign in"</A>
                            <A href=routes::REGISTER>"Create an account"</A>
                        </div>
                    }
                }
            >
                <A href=routes::DASHBOARD>"Continue to your dashboard"</A>
            </Show>
        </div>
    }
}
