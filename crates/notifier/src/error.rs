use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur while sending a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required environment variable is missing or empty.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The request could not be sent.
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// The message body could not be serialized.
    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The messaging API refused the message.
    #[error("push rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}
