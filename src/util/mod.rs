//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions, money formatting, form checks and
//! browser storage out of page/component code so they stay host-testable.

pub mod form;
pub mod guard;
pub mod money;
pub mod routes;
pub mod storage;
pub mod task;
