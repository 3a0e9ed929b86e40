//! bitbank REST client.
//!
//! Market buys on bitbank spot:
//!
//! - **Ticker**: `GET https://public.bitbank.cc/{pair}/ticker`, best bid from `data.buy`
//! - **Order**: `POST https://api.bitbank.cc/v1/user/spot/order`
//! - **Signing**: `ACCESS-SIGNATURE = HMAC-SHA256(secret, nonce + body)`
//! - **Errors**: `success: 0` bodies carry a numeric `data.code`, described
//!   from the published error-code table where known
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use bitbank_rest::BitbankClient;
//! use exchange_core::DcaClient;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let mut client = BitbankClient::new(credentials)?;
//!
//! let outcome = client.order_btc(10_000).await?;
//! ```

mod client;
mod error;
mod responses;

pub use client::{BitbankClient, PRIVATE_API_URL, PUBLIC_API_URL};
pub use error::describe_error_code;
pub use responses::{OrderData, OrderResponse, TickerData, TickerResponse};
