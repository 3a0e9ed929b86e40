//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "ACCESS_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "API_SECRET";

/// API credentials for authenticated requests.
///
/// The secret key is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `ACCESS_KEY` - The access key (public)
    /// - `API_SECRET` - The API secret (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set and
    /// `AuthError::EmptyCredential` if either is blank.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key =
            lookup(ACCESS_KEY_VAR).ok_or_else(|| AuthError::MissingEnvVar(ACCESS_KEY_VAR.into()))?;

        let secret_key =
            lookup(API_SECRET_VAR).ok_or_else(|| AuthError::MissingEnvVar(API_SECRET_VAR.into()))?;

        let credentials = Self::new(api_key, secret_key);
        credentials.validate()?;
        Ok(credentials)
    }

    /// Create credentials from explicit values.
    ///
    /// No validation happens here; see [`ApiCredentials::validate`].
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Check that neither part of the pair is blank.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.api_key.trim().is_empty() {
            return Err(AuthError::EmptyCredential(ACCESS_KEY_VAR));
        }
        if self.secret_key.expose_secret().trim().is_empty() {
            return Err(AuthError::EmptyCredential(API_SECRET_VAR));
        }
        Ok(())
    }

    /// Get the access key (public, sent as a header).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
