//! REST API helpers for communicating with the backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the stored bearer token
//! and cookies attached. Host builds: every call resolves to
//! `ApiError::Unavailable` so logic compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is decoded as an [`ApiEnvelope`]; a readable envelope
//! wins over the HTTP status so server-side messages reach the form that made
//! the request. One attempt per call, no retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::error::ApiError;
use super::types::{
    AdminDashboard, ApiEnvelope, AuthPayload, Charge, ChargeKind, Donation, LedgerEntry, LedgerSummary, Loan,
    LoanApplication, LoanStatusUpdate, LoginRequest, Member, MemberCharge, MemberDashboard, MemberStatus, NewCharge,
    NewDonation, NewLedgerEntry, NewMember, NewPayment, NewPledge, Payment, Pledge, RegisterRequest, Role, User,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn member_role_path(member_id: &str) -> String {
    format!("/members/{member_id}/role")
}

fn member_status_path(member_id: &str) -> String {
    format!("/members/{member_id}/status")
}

fn loan_status_path(loan_id: &str) -> String {
    format!("/loans/{loan_id}/status")
}

fn charges_path(kind: ChargeKind) -> String {
    format!("/{}", kind.collection())
}

fn my_charges_path(kind: ChargeKind) -> String {
    format!("/{}/my", kind.collection())
}

/// Classify a response body. A 401 always means the credentials are gone;
/// otherwise a parseable envelope is returned whatever the status.
#[cfg(any(test, feature = "csr"))]
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(status)),
    }
}

async fn request<B, T>(method: Method, path: &str, body: Option<&B>) -> Result<ApiEnvelope<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let result = dispatch(method, path, body).await;
    if let Err(e) = &result {
        log::warn!("{} {path} failed: {e}", method.as_str());
    }
    result
}

#[cfg(feature = "csr")]
async fn dispatch<B, T>(method: Method, path: &str, body: Option<&B>) -> Result<ApiEnvelope<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    use gloo_net::http::Request;

    let url = endpoint(crate::config::api_base(), path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };
    let mut builder = builder.credentials(web_sys::RequestCredentials::Include);
    if let Some(auth) = super::credentials::authorization_header() {
        builder = builder.header("Authorization", &auth);
    }
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_envelope(status, &text)
}

#[cfg(not(feature = "csr"))]
async fn dispatch<B, T>(method: Method, path: &str, body: Option<&B>) -> Result<ApiEnvelope<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let _ = (method, path, body);
    Err(ApiError::Unavailable)
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Method::Get, path, None).await?.into_data()
}

async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    request::<B, T>(method, path, Some(body)).await?.into_data()
}

async fn send_ack<B: Serialize + ?Sized>(method: Method, path: &str, body: &B) -> Result<Option<String>, ApiError> {
    request::<B, IgnoredAny>(method, path, Some(body)).await?.into_ack()
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for a bearer token and the signed-in user.
///
/// # Errors
///
/// Returns the server's rejection message for bad credentials.
pub async fn login(body: &LoginRequest) -> Result<AuthPayload, ApiError> {
    send(Method::Post, "/auth/login", body).await
}

/// Create a member account; returns the server's confirmation message.
///
/// # Errors
///
/// Returns the server's rejection message, e.g. for a duplicate email.
pub async fn register(body: &RegisterRequest) -> Result<Option<String>, ApiError> {
    send_ack(Method::Post, "/auth/register", body).await
}

/// Fetch the user behind the current credentials from `/auth/me`.
///
/// A 401 also drops the stored token so later requests go out anonymous.
///
/// # Errors
///
/// Any failure means "not signed in" to the caller.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let result = get::<User>("/auth/me").await;
    if matches!(&result, Err(e) if e.is_unauthorized()) {
        super::credentials::clear_token();
    }
    result
}

/// End the server-side session and forget the local token.
///
/// # Errors
///
/// The local token is cleared even when the request fails.
pub async fn logout() -> Result<(), ApiError> {
    let result = send_ack(Method::Post, "/auth/logout", &serde_json::json!({})).await;
    super::credentials::clear_token();
    result.map(|_| ())
}

// =============================================================
// Dashboards
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn fetch_member_dashboard() -> Result<MemberDashboard, ApiError> {
    get("/dashboard/member").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn fetch_admin_dashboard() -> Result<AdminDashboard, ApiError> {
    get("/dashboard/admin").await
}

// =============================================================
// Members
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn list_members() -> Result<Vec<Member>, ApiError> {
    get("/members").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn create_member(body: &NewMember) -> Result<Member, ApiError> {
    send(Method::Post, "/members", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn update_member_role(member_id: &str, role: Role) -> Result<Member, ApiError> {
    let body = serde_json::json!({ "role": role });
    send(Method::Put, &member_role_path(member_id), &body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn update_member_status(member_id: &str, status: MemberStatus) -> Result<Member, ApiError> {
    let body = serde_json::json!({ "status": status });
    send(Method::Put, &member_status_path(member_id), &body).await
}

// =============================================================
// Loans
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn my_loans() -> Result<Vec<Loan>, ApiError> {
    get("/loans/my").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn apply_for_loan(body: &LoanApplication) -> Result<Loan, ApiError> {
    send(Method::Post, "/loans/apply", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn list_loans() -> Result<Vec<Loan>, ApiError> {
    get("/loans").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn update_loan_status(loan_id: &str, body: &LoanStatusUpdate) -> Result<Loan, ApiError> {
    send(Method::Put, &loan_status_path(loan_id), body).await
}

// =============================================================
// Dues and levies
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn list_charges(kind: ChargeKind) -> Result<Vec<Charge>, ApiError> {
    get(&charges_path(kind)).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn create_charge(kind: ChargeKind, body: &NewCharge) -> Result<Charge, ApiError> {
    send(Method::Post, &charges_path(kind), body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn my_charges(kind: ChargeKind) -> Result<Vec<MemberCharge>, ApiError> {
    get(&my_charges_path(kind)).await
}

// =============================================================
// Payments, pledges, donations
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn make_payment(body: &NewPayment) -> Result<Payment, ApiError> {
    send(Method::Post, "/payments", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn my_payments() -> Result<Vec<Payment>, ApiError> {
    get("/payments/my").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn list_payments() -> Result<Vec<Payment>, ApiError> {
    get("/payments").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn make_pledge(body: &NewPledge) -> Result<Pledge, ApiError> {
    send(Method::Post, "/pledges", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn my_pledges() -> Result<Vec<Pledge>, ApiError> {
    get("/pledges/my").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn make_donation(body: &NewDonation) -> Result<Donation, ApiError> {
    send(Method::Post, "/donations", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn my_donations() -> Result<Vec<Donation>, ApiError> {
    get("/donations/my").await
}

// =============================================================
// Accounting
// =============================================================

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn list_ledger_entries() -> Result<Vec<LedgerEntry>, ApiError> {
    get("/accounting/entries").await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn record_ledger_entry(body: &NewLedgerEntry) -> Result<LedgerEntry, ApiError> {
    send(Method::Post, "/accounting/entries", body).await
}

/// # Errors
///
/// Propagates request and envelope failures.
pub async fn fetch_ledger_summary() -> Result<LedgerSummary, ApiError> {
    get("/accounting/summary").await
}
