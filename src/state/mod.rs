//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the session record, `session` drives it from the API and is the
//! handle injected through context, and `charge_form` backs the multi-step
//! due/levy wizard.

pub mod auth;
pub mod charge_form;
pub mod session;
