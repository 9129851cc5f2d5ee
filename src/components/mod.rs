//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing gates (`protected_route`, `default_redirect`), the layout shell
//! and small form pieces shared by the pages. Components read the session
//! from Leptos context.

pub mod default_redirect;
pub mod layout;
pub mod loading;
pub mod member_picker;
pub mod notice_line;
pub mod protected_route;
