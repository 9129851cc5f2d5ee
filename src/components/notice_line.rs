//! Inline success/error line under a form.

use leptos::prelude::*;

use crate::util::form::FormNotice;

#[component]
pub fn NoticeLine(notice: RwSignal<Option<FormNotice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.is_error() { "form-notice form-notice--error" } else { "form-notice form-notice--success" };
            view! { <p class=class>{n.text().to_owned()}</p> }
        })
    }
}
