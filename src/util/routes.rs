//! Route paths shared by the router, guards and navigation.

pub const LANDING: &str = "/landing";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";

pub const MEMBER_HOME: &str = "/";
pub const MEMBER_LOANS: &str = "/loans";
pub const MEMBER_PAYMENTS: &str = "/payments";
pub const MEMBER_CONTRIBUTIONS: &str = "/contributions";

pub const ADMIN_HOME: &str = "/admin";
pub const ADMIN_MEMBERS: &str = "/admin/members";
pub const ADMIN_DUES: &str = "/admin/dues";
pub const ADMIN_LEVIES: &str = "/admin/levies";
pub const ADMIN_LOANS: &str = "/admin/loans";
pub const ADMIN_ACCOUNTING: &str = "/admin/accounting";
