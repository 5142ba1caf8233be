//! Wire DTOs for the BudgetAI backend.
//!
//! DESIGN
//! ======
//! Response types are lenient where the backend is loose (amounts may arrive
//! as numbers or numeric strings, optional fields may be missing) so a single
//! odd row never fails a whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /user/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /user/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /upload/csv` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
}

/// One row of `GET /query/transactions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default)]
    pub transaction_date: String,
}

/// One month of `GET /query/transactions/totals`: `[label, {category: amount}]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals(pub String, pub BTreeMap<String, f64>);

impl MonthTotals {
    pub fn month(&self) -> &str {
        &self.0
    }

    pub fn categories(&self) -> &BTreeMap<String, f64> {
        &self.1
    }
}

/// `POST /chat/prompt` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatPrompt {
    pub query: String,
}

/// `POST /chat/prompt` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Decode a `GET /query/transactions` body row by row.
///
/// Rows that fail to decode are skipped; the second value counts them.
pub fn parse_transactions(rows: Vec<serde_json::Value>) -> (Vec<Transaction>, usize) {
    let mut parsed = Vec::with_capacity(rows.len());
    let mut dropped = 0;
    for row in rows {
        match serde_json::from_value::<Transaction>(row) {
            Ok(tx) => parsed.push(tx),
            Err(_) => dropped += 1,
        }
    }
    (parsed, dropped)
}

/// Split the `insights` field of `GET /chat/insights` into statements.
///
/// Anything other than an object with a string `insights` field yields an
/// empty list; blank lines are dropped.
pub fn parse_insights(body: &serde_json::Value) -> Vec<String> {
    body.get("insights")
        .and_then(serde_json::Value::as_str)
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("amount is not representable as f64")),
        serde_json::Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| !matches!(c, '$' | ',')).collect();
            cleaned
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid amount {s:?}")))
        }
        _ => Err(D::Error::custom("amount must be a number")),
    }
}
