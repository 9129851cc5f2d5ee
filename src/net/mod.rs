//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests and unwraps the `{success, data, message}` envelope,
//! `credentials` owns the bearer token, `error` classifies failures and
//! `types` defines the wire schema.

pub mod api;
pub mod credentials;
pub mod error;
pub mod types;
