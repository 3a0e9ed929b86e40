//! Generic REST client infrastructure.
//!
//! This crate provides a thin layer over `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - An `HttpTransport` seam so exchange clients can be tested without a network
//! - JSON response deserialization
//! - Header injection for authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Ticker {
//!     ltp: f64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://api.bitflyer.com")?;
//! let ticker: Ticker = client.get_json("/v1/ticker", Some("product_code=BTC_JPY"), None).await?;
//! ```

mod client;
mod error;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::RestClient;
pub use error::RestError;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
