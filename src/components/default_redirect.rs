//! Sends an unqualified navigation to the right home for the session.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use super::loading::LoadingScreen;
use crate::state::session::Session;
use crate::util::guard::{MountCheck, resolve_default_route};

#[component]
pub fn DefaultRedirect() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.state();
    let check = RwSignal::new(MountCheck::default());

    Effect::new(move || {
        let state = auth.get();
        if check.try_update(|c| c.observe(&state)).unwrap_or(false) {
            session.refresh();
        }
    });

    let target = Memo::new(move |_| resolve_default_route(&auth.get(), check.get().has_checked()));

    move || match target.get() {
        Some(path) => view! { <Redirect path=path/> }.into_any(),
        None => view! { <LoadingScreen/> }.into_any(),
    }
}
