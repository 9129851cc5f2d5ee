//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Every endpoint wraps its payload in [`ApiEnvelope`]; the typed payloads
//! below mirror the server's JSON so serde round-trips stay lossless. Amounts
//! travel as plain JSON numbers in the platform currency.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Response envelope shared by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful response.
    ///
    /// # Errors
    ///
    /// `Rejected` when `success` is false, `MissingData` when no payload is present.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(rejection(self.message));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Accept a successful response regardless of payload, returning its message.
    ///
    /// # Errors
    ///
    /// `Rejected` when `success` is false.
    pub fn into_ack(self) -> Result<Option<String>, ApiError> {
        if self.success { Ok(self.message) } else { Err(rejection(self.message)) }
    }
}

fn rejection(message: Option<String>) -> ApiError {
    let message = message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "request was rejected".to_owned());
    ApiError::Rejected(message)
}

// =============================================================
// Identity
// =============================================================

/// Privilege tier of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "admin_level_1")]
    AdminLevel1,
    #[serde(rename = "admin_level_2")]
    AdminLevel2,
    #[serde(rename = "super_admin")]
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Member, Role::Admin, Role::AdminLevel1, Role::AdminLevel2, Role::SuperAdmin];
    pub const ADMIN_TIER: [Role; 4] = [Role::Admin, Role::AdminLevel1, Role::AdminLevel2, Role::SuperAdmin];
    pub const MEMBER_ONLY: [Role; 1] = [Role::Member];

    pub fn is_admin_tier(self) -> bool {
        Self::ADMIN_TIER.contains(&self)
    }

    /// Wire value, as used in role-change requests and select options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::AdminLevel1 => "admin_level_1",
            Self::AdminLevel2 => "admin_level_2",
            Self::SuperAdmin => "super_admin",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
            Self::AdminLevel1 => "Admin (level 1)",
            Self::AdminLevel2 => "Admin (level 2)",
            Self::SuperAdmin => "Super admin",
        }
    }
}

/// The signed-in user as returned by `/auth/me` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub member_number: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

// =============================================================
// Members
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub member_number: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub status: MemberStatus,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

// =============================================================
// Loans
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Disbursed,
    Repaid,
}

impl LoanStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Disbursed => "Disbursed",
            Self::Repaid => "Repaid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub member_id: String,
    #[serde(default)]
    pub member_name: Option<String>,
    pub amount: f64,
    pub term_months: u32,
    pub purpose: String,
    pub status: LoanStatus,
    #[serde(default)]
    pub balance: f64,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub amount: f64,
    pub term_months: u32,
    pub purpose: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanStatusUpdate {
    pub status: LoanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// =============================================================
// Dues and levies
// =============================================================

/// Which kind of member obligation a charge is; selects the API collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChargeKind {
    Due,
    Levy,
}

impl ChargeKind {
    pub fn collection(self) -> &'static str {
        match self {
            Self::Due => "dues",
            Self::Levy => "levies",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Due => "Due",
            Self::Levy => "Levy",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Due => "Dues",
            Self::Levy => "Levies",
        }
    }
}

/// A due or levy as defined by an administrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub due_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: Option<u32>,
}

/// Request body for creating a due or levy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCharge {
    pub title: String,
    pub amount: f64,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub apply_to_all: bool,
    pub member_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Unpaid,
    Partial,
    Paid,
}

/// A member's obligation against one due or levy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberCharge {
    pub id: String,
    pub charge_id: String,
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub amount_paid: f64,
    pub due_date: String,
    pub status: ChargeStatus,
}

impl MemberCharge {
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.amount_paid).max(0.0)
    }
}

// =============================================================
// Payments, pledges, donations
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    LoanRepayment,
    Due,
    Levy,
    Pledge,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 4] = [Self::LoanRepayment, Self::Due, Self::Levy, Self::Pledge];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoanRepayment => "loan_repayment",
            Self::Due => "due",
            Self::Levy => "levy",
            Self::Pledge => "pledge",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LoanRepayment => "Loan repayment",
            Self::Due => "Due",
            Self::Levy => "Levy",
            Self::Pledge => "Pledge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Card,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::BankTransfer, Self::Card, Self::Cash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank transfer",
            Self::Card => "Card",
            Self::Cash => "Cash",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub kind: PaymentKind,
    #[serde(default)]
    pub reference_id: Option<String>,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default)]
    pub member_name: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub kind: PaymentKind,
    pub reference_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pledge {
    pub id: String,
    pub amount: f64,
    pub purpose: String,
    pub fulfil_by: String,
    #[serde(default)]
    pub amount_fulfilled: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPledge {
    pub amount: f64,
    pub purpose: String,
    pub fulfil_by: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub amount: f64,
    pub cause: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDonation {
    pub amount: f64,
    pub cause: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// =============================================================
// Accounting
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub kind: EntryKind,
    pub category: String,
    pub amount: f64,
    pub entry_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recorded_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    pub kind: EntryKind,
    pub category: String,
    pub amount: f64,
    pub entry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

// =============================================================
// Dashboards
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberDashboard {
    #[serde(default)]
    pub outstanding_dues: f64,
    #[serde(default)]
    pub outstanding_levies: f64,
    #[serde(default)]
    pub active_loan_balance: f64,
    #[serde(default)]
    pub total_contributions: f64,
    #[serde(default)]
    pub recent_payments: Vec<Payment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub active_members: u32,
    #[serde(default)]
    pub pending_loans: u32,
    #[serde(default)]
    pub total_collections: f64,
    #[serde(default)]
    pub ledger_balance: f64,
}
