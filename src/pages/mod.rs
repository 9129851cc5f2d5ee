//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages sit at the top level; `member` and `admin` pages are only
//! reachable through `ProtectedRoute`. Each page owns its form state and
//! delegates validation to pure helpers tested alongside it.

pub mod admin;
pub mod landing;
pub mod login;
pub mod member;
pub mod register;
