//! HMAC-SHA256 request signing.

use crate::credentials::ApiCredentials;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign `message` with `key` and return the lowercase hex digest.
pub fn sign(message: &str, key: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");

    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Request signer for authenticated exchange calls.
///
/// The canonical message is exchange specific:
/// - bitbank: `nonce + body`
/// - bitFlyer: `timestamp + method + path + body`
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the hex-encoded signature.
    pub fn sign(&self, message: &str) -> String {
        sign(message, self.credentials.expose_secret())
    }

    /// Sign the concatenation of `parts` without separators.
    pub fn sign_parts(&self, parts: &[&str]) -> String {
        self.sign(&parts.concat())
    }
}
