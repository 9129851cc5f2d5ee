//! # memberfund
//!
//! Leptos + WASM client for the member financial-management platform.
//!
//! Members apply for loans and make payments, pledges and donations;
//! administrators manage members, dues, levies, loans and the ledger. All
//! data lives behind a JSON API (see `net::api`); this crate owns the session
//! bootstrap, role-gated routing and the form state behind each screen.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
