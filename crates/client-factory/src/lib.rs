//! Builds the exchange client named by configuration.
//!
//! The exchange is resolved once here; everything downstream works with a
//! `Box<dyn DcaClient>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let mut client = client_factory::create_client_from_name("bitbank", credentials)?;
//! client.order_btc(10_000).await?;
//! ```

use auth::{ApiCredentials, AuthError};
use bitbank_rest::BitbankClient;
use bitflyer_rest::BitflyerClient;
use exchange_core::BoxedClient;
use model::{Exchange, ParseExchangeError};
use rest_client::{HttpTransport, RestError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that prevent a client from being built.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The selector does not name a supported exchange.
    #[error("unsupported exchange: {0}")]
    UnknownExchange(#[from] ParseExchangeError),

    /// Credentials are missing or empty.
    #[error("invalid credentials: {0}")]
    Auth(#[from] AuthError),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Rest(#[from] RestError),
}

/// Build a production client for `exchange`.
pub fn create_client(
    exchange: Exchange,
    credentials: ApiCredentials,
) -> Result<BoxedClient, FactoryError> {
    credentials.validate()?;
    build_client(exchange, credentials)
}

/// Build a production client from a selector string such as `"bitbank"`.
pub fn create_client_from_name(
    name: &str,
    credentials: ApiCredentials,
) -> Result<BoxedClient, FactoryError> {
    credentials.validate()?;
    build_client(name.parse::<Exchange>()?, credentials)
}

/// Build a client for `exchange` on top of an existing transport.
pub fn create_client_with_transport(
    exchange: Exchange,
    credentials: ApiCredentials,
    transport: Arc<dyn HttpTransport>,
) -> Result<BoxedClient, FactoryError> {
    credentials.validate()?;

    let client: BoxedClient = match exchange {
        Exchange::Bitbank => Box::new(BitbankClient::with_transport(credentials, transport)),
        Exchange::Bitflyer => Box::new(BitflyerClient::with_transport(credentials, transport)),
    };
    Ok(client)
}

/// Build a production client from credentials that are already validated.
fn build_client(
    exchange: Exchange,
    credentials: ApiCredentials,
) -> Result<BoxedClient, FactoryError> {
    let client: BoxedClient = match exchange {
        Exchange::Bitbank => Box::new(BitbankClient::new(credentials)?),
        Exchange::Bitflyer => Box::new(BitflyerClient::new(credentials)?),
    };

    tracing::info!(exchange = %exchange, "Exchange client created");
    Ok(client)
}
