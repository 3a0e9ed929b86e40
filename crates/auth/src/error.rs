use thiserror::Error;

/// Errors that can occur while loading credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A credential was supplied but is empty.
    #[error("Empty credential: {0}")]
    EmptyCredential(&'static str),
}
