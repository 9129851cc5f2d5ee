//! Fire-and-forget async work for event handlers.
//!
//! Anything written to page signals after an `.await` goes through
//! `try_set`/`try_update`: the page may have been unmounted in between.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::util::form::FormNotice;

/// Run `fut` on the browser event loop. Host builds have no event loop, so
/// the future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Fetch data for a page and land it in `into`. A failure is shown through
/// `notice`; a page unmounted mid-request drops the result.
pub fn load<T, F>(what: &'static str, fut: F, into: RwSignal<T>, notice: RwSignal<Option<FormNotice>>)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn(async move {
        match fut.await {
            Ok(value) => {
                if into.try_set(value).is_some() {
                    log::debug!("{what} arrived after the page closed");
                }
            }
            Err(e) => {
                notice.try_set(Some(FormNotice::from_api(&format!("Loading {what}"), &e)));
            }
        }
    });
}
