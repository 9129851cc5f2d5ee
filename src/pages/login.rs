//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::util::form::{FormNotice, required};
use crate::util::guard::home_for_role;
use crate::util::routes;
use crate::util::task::spawn;

/// Passwords are sent as typed; only the email is trimmed.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = required(email, "Enter your email.")?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        let navigate = navigate.clone();
        spawn(async move {
            match api::login(&body).await {
                Ok(payload) => {
                    let home = home_for_role(payload.user.role);
                    session.sign_in(payload);
                    password.try_set(String::new());
                    navigate(home, NavigateOptions::default());
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Sign in", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <NoticeLine notice=notice/>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <A href=routes::REGISTER>"Register"</A>
                </p>
            </div>
        </div>
    }
}
