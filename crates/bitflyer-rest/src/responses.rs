//! bitFlyer API request and response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market state in which orders are accepted.
pub(crate) const STATE_RUNNING: &str = "RUNNING";

/// Body of `POST /v1/me/sendchildorder`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChildOrderRequest<'a> {
    pub product_code: &'a str,
    pub child_order_type: &'static str,
    pub side: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
}

/// Response from `GET /v1/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub product_code: Option<String>,
    /// Market state, e.g. `RUNNING`, `CLOSED`, `CIRCUIT BREAK`.
    #[serde(default)]
    pub state: Option<String>,
    /// Last traded price.
    #[serde(default)]
    pub ltp: Option<Decimal>,
}

/// Successful response from `POST /v1/me/sendchildorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderAcceptedResponse {
    pub child_order_acceptance_id: String,
}

/// Error body returned with non-200 statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body, tolerating non-JSON payloads.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            status: None,
            error_message: (!body.trim().is_empty()).then(|| body.trim().to_string()),
        })
    }

    /// Render as `"{status}: {message}"` with whatever is available.
    pub fn describe(&self) -> String {
        match (self.status, self.error_message.as_deref()) {
            (Some(status), Some(message)) => format!("bitFlyer status {status}: {message}"),
            (Some(status), None) => format!("bitFlyer status {status}"),
            (None, Some(message)) => message.to_string(),
            (None, None) => "bitFlyer returned no error message".to_string(),
        }
    }
}
