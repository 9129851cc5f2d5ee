//! Member self-registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::util::form::{FormNotice, required};
use crate::util::routes;
use crate::util::task::spawn;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterDraft {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password: String,
    confirm: String,
}

impl RegisterDraft {
    fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = required(&self.first_name, "Enter your first name.")?;
        let last_name = required(&self.last_name, "Enter your last name.")?;
        let email = required(&self.email, "Enter your email.")?;
        let phone = required(&self.phone, "Enter your phone number.")?;
        if self.password.is_empty() {
            return Err("Choose a password.");
        }
        if self.password != self.confirm {
            return Err("Passwords do not match.");
        }
        Ok(RegisterRequest { first_name, last_name, email, phone, password: self.password.clone() })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(RegisterDraft::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(RegisterDraft::to_request) {
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
            match api::register(&body).await {
                Ok(_) => {
                    draft.try_set(RegisterDraft::default());
                    navigate(routes::LOGIN, NavigateOptions::default());
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Registration", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&RegisterDraft) -> String, set: fn(&mut RegisterDraft, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("First name", "text", |d| d.first_name.clone(), |d, v| d.first_name = v)}
                    {field("Last name", "text", |d| d.last_name.clone(), |d, v| d.last_name = v)}
                    {field("Email", "email", |d| d.email.clone(), |d, v| d.email = v)}
                    {field("Phone", "tel", |d| d.phone.clone(), |d, v| d.phone = v)}
                    {field("Password", "password", |d| d.password.clone(), |d, v| d.password = v)}
                    {field("Confirm password", "password", |d| d.confirm.clone(), |d, v| d.confirm = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <NoticeLine notice=notice/>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
