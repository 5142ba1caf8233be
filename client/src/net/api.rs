//! Typed helpers for each BudgetAI backend endpoint.
//!
//! Every helper goes through [`gateway::request`]; this module only pins the
//! path, method and payload shape per endpoint.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{self, ApiError, Method, MultipartForm, RequestBody};
use super::types::{
    ChatPrompt, ChatReply, LoginRequest, MonthTotals, SignupRequest, Transaction, UploadResponse, parse_insights,
    parse_transactions,
};

pub const SIGNUP_PATH: &str = "/user/signup";
pub const LOGIN_PATH: &str = "/user/login";
pub const SIGNOUT_PATH: &str = "/user/signout";
pub const UPLOAD_CSV_PATH: &str = "/upload/csv";
pub const TRANSACTIONS_PATH: &str = "/query/transactions";
pub const MONTHLY_TOTALS_PATH: &str = "/query/transactions/totals";
pub const CHAT_PROMPT_PATH: &str = "/chat/prompt";
pub const CHAT_INSIGHTS_PATH: &str = "/chat/insights";

/// Multipart field name the upload endpoint reads.
pub const UPLOAD_FIELD: &str = "file";

/// Create an account via `POST /user/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn signup(req: &SignupRequest) -> Result<serde_json::Value, ApiError> {
    gateway::request(SIGNUP_PATH, Method::Post, Some(RequestBody::json(req)?)).await
}

/// Authenticate via `POST /user/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(req: &LoginRequest) -> Result<serde_json::Value, ApiError> {
    gateway::request(LOGIN_PATH, Method::Post, Some(RequestBody::json(req)?)).await
}

/// End the backend session via `GET /user/signout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn signout() -> Result<serde_json::Value, ApiError> {
    gateway::request(SIGNOUT_PATH, Method::Get, None).await
}

/// Upload transaction CSV files via `POST /upload/csv`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upload fails or is rejected.
pub async fn upload_csv(form: MultipartForm) -> Result<UploadResponse, ApiError> {
    gateway::request(UPLOAD_CSV_PATH, Method::Post, Some(RequestBody::Multipart(form))).await
}

/// List the user's transactions via `GET /query/transactions`.
///
/// Rows that do not decode are dropped and logged; the rest are kept.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a JSON array.
pub async fn fetch_transactions() -> Result<Vec<Transaction>, ApiError> {
    let rows: Vec<serde_json::Value> = gateway::request(TRANSACTIONS_PATH, Method::Get, None).await?;
    let (transactions, dropped) = parse_transactions(rows);
    if dropped > 0 {
        #[cfg(feature = "hydrate")]
        log::warn!("skipped {dropped} malformed transaction rows");
    }
    Ok(transactions)
}

/// Fetch per-month category totals via `GET /query/transactions/totals`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_monthly_totals() -> Result<Vec<MonthTotals>, ApiError> {
    gateway::request(MONTHLY_TOTALS_PATH, Method::Get, None).await
}

/// Ask the assistant via `POST /chat/prompt`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn send_chat_prompt(query: &str) -> Result<ChatReply, ApiError> {
    let prompt = ChatPrompt { query: query.to_owned() };
    gateway::request(CHAT_PROMPT_PATH, Method::Post, Some(RequestBody::json(&prompt)?)).await
}

/// Fetch trend statements via `GET /chat/insights`.
///
/// A body without a string `insights` field yields an empty list.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn fetch_insights() -> Result<Vec<String>, ApiError> {
    let body: serde_json::Value = gateway::request(CHAT_INSIGHTS_PATH, Method::Get, None).await?;
    Ok(parse_insights(&body))
}

/// User-facing text for a failed call.
pub fn failure_message(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401 | 403, .. } => format!("{action} failed: please log in again."),
        ApiError::Status { .. } => format!("{action} failed. {err}"),
        ApiError::Network(_) | ApiError::Unavailable => format!("{action} failed: could not reach the server."),
        ApiError::Decode(_) | ApiError::Encode(_) => format!("{action} failed: unexpected response."),
    }
}
