//! Errors surfaced by exchange clients.

use common::AmountError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur while placing a DCA order.
///
/// Every variant is fatal for the order attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Ticker endpoint unreachable or its body could not be decoded.
    #[error("failed to get ticker: {0}")]
    Ticker(#[source] RestError),

    /// Ticker body reported failure.
    #[error("ticker rejected: {message}")]
    TickerRejected {
        /// Exchange error code, when present.
        code: Option<i64>,
        /// Human-readable description.
        message: String,
    },

    /// Market is halted, in maintenance, or otherwise not tradable.
    #[error("market is not running: {state}")]
    MarketNotRunning {
        /// State string reported by the exchange.
        state: String,
    },

    /// Ticker price was missing, unparsable, or not positive.
    #[error("invalid ticker price: {0}")]
    InvalidPrice(String),

    /// Order size could not be computed.
    #[error("failed to calculate amount: {0}")]
    Amount(#[from] AmountError),

    /// Order body could not be serialized.
    #[error("failed to serialize order: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Order endpoint unreachable or its body could not be decoded.
    #[error("failed to send order: {0}")]
    Order(#[source] RestError),

    /// Exchange refused the order.
    #[error("order rejected (HTTP {status}): {message}")]
    OrderRejected {
        /// HTTP status of the order response.
        status: u16,
        /// Exchange error code, when present.
        code: Option<i64>,
        /// Human-readable description including the exchange's own message.
        message: String,
    },
}

impl ExchangeError {
    /// True if the response arrived but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Ticker(RestError::Parse(_)) | Self::Order(RestError::Parse(_))
        )
    }

    /// Exchange-reported error code, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::TickerRejected { code, .. } | Self::OrderRejected { code, .. } => *code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_stage() {
        let err = ExchangeError::Ticker(RestError::Timeout);
        assert_eq!(err.to_string(), "failed to get ticker: Request timeout");

        let err = ExchangeError::OrderRejected {
            status: 400,
            code: Some(60001),
            message: "code 60001".into(),
        };
        assert_eq!(err.to_string(), "order rejected (HTTP 400): code 60001");
        assert_eq!(err.code(), Some(60001));
    }

    #[test]
    fn test_is_decode() {
        assert!(ExchangeError::Order(RestError::Parse("eof".into())).is_decode());
        assert!(!ExchangeError::Order(RestError::Timeout).is_decode());
        assert!(!ExchangeError::InvalidPrice("abc".into()).is_decode());
    }
}
