//! Authentication and signing for exchange APIs.
//!
//! This crate provides secure credential management, HMAC-SHA256 request
//! signing and the per-client nonce sequence used by the private endpoints
//! of bitbank and bitFlyer.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Hex-encoded signatures over an exchange-specific
//!   canonical message.
//! - **Nonces**: A strictly increasing counter seeded from the clock.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, NonceCounter, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let mut nonce = NonceCounter::new();
//!
//! let n = nonce.next();
//! let signature = RequestSigner::new(&credentials).sign(&format!("{n}{body}"));
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use nonce::NonceCounter;
pub use signer::{sign, RequestSigner};
