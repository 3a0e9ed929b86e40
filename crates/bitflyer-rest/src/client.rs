//! bitFlyer Lightning REST API client.

use crate::responses::{
    ChildOrderRequest, ErrorResponse, OrderAcceptedResponse, TickerResponse, STATE_RUNNING,
};
use async_trait::async_trait;
use auth::{ApiCredentials, NonceCounter, RequestSigner};
use exchange_core::{DcaClient, ExchangeError};
use model::{Exchange, OrderOutcome, Pair};
use rest_client::{HttpTransport, Method, ReqwestTransport, RestClient, RestError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// API host. Paths below include the `/v1` prefix because it is part of the
/// signed message.
pub const API_URL: &str = "https://api.bitflyer.com";

const TICKER_PATH: &str = "/v1/ticker";
const SEND_CHILD_ORDER_PATH: &str = "/v1/me/sendchildorder";

/// Request timeout for bitFlyer API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// bitFlyer client with authentication support.
pub struct BitflyerClient {
    client: RestClient,
    credentials: ApiCredentials,
    /// Sent as `ACCESS-TIMESTAMP`.
    nonce: NonceCounter,
}

impl BitflyerClient {
    /// Create a client for the production endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, RestError> {
        let transport = ReqwestTransport::new(REQUEST_TIMEOUT)?;
        Ok(Self::with_transport(credentials, Arc::new(transport)))
    }

    /// Create a client for the production endpoint on a given transport.
    pub fn with_transport(credentials: ApiCredentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_base_url(credentials, transport, API_URL)
    }

    /// Create a client against an arbitrary host.
    pub fn with_base_url(
        credentials: ApiCredentials,
        transport: Arc<dyn HttpTransport>,
        base_url: &str,
    ) -> Self {
        Self {
            client: RestClient::with_transport(base_url, transport),
            credentials,
            nonce: NonceCounter::new(),
        }
    }

    /// Replace the timestamp sequence.
    pub fn with_nonce(mut self, nonce: NonceCounter) -> Self {
        self.nonce = nonce;
        self
    }

    /// Lot granularity for `pair`: 0.001 BTC, 0.01 ETH.
    pub fn granularity(pair: Pair) -> i64 {
        match pair {
            Pair::BtcJpy => 1_000,
            Pair::EthJpy => 100,
        }
    }

    /// Get the last traded price for `pair` in whole JPY.
    ///
    /// GET /v1/ticker?product_code={pair}
    ///
    /// Fails with `MarketNotRunning` unless the market state is `RUNNING`.
    pub async fn get_price(&self, pair: Pair) -> Result<i64, ExchangeError> {
        let query = format!("product_code={}", pair.as_bitflyer_str());
        let response = self
            .client
            .get(TICKER_PATH, Some(query.as_str()), None)
            .await
            .map_err(ExchangeError::Ticker)?;

        if !response.is_success() {
            let error = ErrorResponse::from_body(&response.body);
            return Err(ExchangeError::TickerRejected {
                code: error.status,
                message: format!("HTTP {}: {}", response.status, error.describe()),
            });
        }

        let ticker: TickerResponse = response.json().map_err(ExchangeError::Ticker)?;

        let state = ticker.state.unwrap_or_default();
        if state != STATE_RUNNING {
            return Err(ExchangeError::MarketNotRunning {
                state: if state.is_empty() {
                    "<missing>".to_string()
                } else {
                    state
                },
            });
        }

        let ltp = ticker
            .ltp
            .ok_or_else(|| ExchangeError::InvalidPrice("missing ltp".into()))?;
        let price = whole_yen(ltp)?;

        tracing::debug!(pair = %pair, price = price, "Ticker received");
        Ok(price)
    }

    /// Submit a signed market buy for `size` of `pair`.
    ///
    /// POST /v1/me/sendchildorder
    async fn send_market_buy(
        &mut self,
        pair: Pair,
        size: Decimal,
    ) -> Result<OrderOutcome, ExchangeError> {
        let body = serde_json::to_string(&ChildOrderRequest {
            product_code: pair.as_bitflyer_str(),
            child_order_type: "MARKET",
            side: "BUY",
            size,
        })?;

        let timestamp = self.nonce.next().to_string();
        let signature = RequestSigner::new(&self.credentials).sign_parts(&[
            timestamp.as_str(),
            Method::Post.as_str(),
            SEND_CHILD_ORDER_PATH,
            body.as_str(),
        ]);

        let headers = [
            ("ACCESS-KEY", self.credentials.api_key()),
            ("ACCESS-TIMESTAMP", timestamp.as_str()),
            ("ACCESS-SIGN", signature.as_str()),
            ("Content-Type", "application/json"),
        ];

        tracing::info!(pair = %pair, size = %size, "Placing market buy");

        let response = self
            .client
            .post_json(SEND_CHILD_ORDER_PATH, body, Some(&headers[..]))
            .await
            .map_err(ExchangeError::Order)?;

        if response.status != 200 {
            let error = ErrorResponse::from_body(&response.body);
            return Err(ExchangeError::OrderRejected {
                status: response.status,
                code: error.status,
                message: error.describe(),
            });
        }

        let accepted: OrderAcceptedResponse = response.json().map_err(ExchangeError::Order)?;

        tracing::info!(
            pair = %pair,
            acceptance_id = %accepted.child_order_acceptance_id,
            "Order accepted"
        );

        Ok(OrderOutcome::Accepted {
            acceptance_id: Some(accepted.child_order_acceptance_id),
        })
    }
}

#[async_trait]
impl DcaClient for BitflyerClient {
    fn exchange(&self) -> Exchange {
        Exchange::Bitflyer
    }

    async fn order(&mut self, pair: Pair, budget: i64) -> Result<OrderOutcome, ExchangeError> {
        let price = self.get_price(pair).await?;
        let size = common::calc_amount(price, budget, Self::granularity(pair))?;

        if size.is_zero() {
            tracing::warn!(
                pair = %pair,
                budget = budget,
                price = price,
                "Amount is too small, skipping"
            );
            return Ok(OrderOutcome::Skipped);
        }

        self.send_market_buy(pair, size).await
    }
}

impl std::fmt::Debug for BitflyerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitflyerClient")
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .field("nonce", &self.nonce.last())
            .finish()
    }
}

/// Truncate a price to positive whole JPY.
fn whole_yen(price: Decimal) -> Result<i64, ExchangeError> {
    match price.trunc().to_i64() {
        Some(yen) if yen > 0 => Ok(yen),
        _ => Err(ExchangeError::InvalidPrice(price.to_string())),
    }
}
