//! bitbank REST API client.

use crate::error::rejection_message;
use crate::responses::{OrderRequest, OrderResponse, TickerResponse};
use async_trait::async_trait;
use auth::{ApiCredentials, NonceCounter, RequestSigner};
use exchange_core::{DcaClient, ExchangeError};
use model::{Exchange, OrderOutcome, Pair};
use rest_client::{HttpTransport, ReqwestTransport, RestClient, RestError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// Public (unauthenticated) API host.
pub const PUBLIC_API_URL: &str = "https://public.bitbank.cc";
/// Private (authenticated) API base.
pub const PRIVATE_API_URL: &str = "https://api.bitbank.cc/v1";

/// Order endpoint, relative to [`PRIVATE_API_URL`].
const ORDER_PATH: &str = "/user/spot/order";

/// Request timeout for bitbank API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Amounts are accepted with four decimal places on both pairs.
const AMOUNT_GRANULARITY: i64 = 10_000;

/// bitbank client with authentication support.
pub struct BitbankClient {
    public: RestClient,
    private: RestClient,
    credentials: ApiCredentials,
    nonce: NonceCounter,
}

impl BitbankClient {
    /// Create a client for the production endpoints.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, RestError> {
        let transport = ReqwestTransport::new(REQUEST_TIMEOUT)?;
        Ok(Self::with_transport(credentials, Arc::new(transport)))
    }

    /// Create a client for the production endpoints on a given transport.
    pub fn with_transport(credentials: ApiCredentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_base_urls(credentials, transport, PUBLIC_API_URL, PRIVATE_API_URL)
    }

    /// Create a client against arbitrary hosts.
    pub fn with_base_urls(
        credentials: ApiCredentials,
        transport: Arc<dyn HttpTransport>,
        public_url: &str,
        private_url: &str,
    ) -> Self {
        Self {
            public: RestClient::with_transport(public_url, transport.clone()),
            private: RestClient::with_transport(private_url, transport),
            credentials,
            nonce: NonceCounter::new(),
        }
    }

    /// Replace the nonce sequence (e.g. to continue from a known value).
    pub fn with_nonce(mut self, nonce: NonceCounter) -> Self {
        self.nonce = nonce;
        self
    }

    /// Lot granularity for `pair`.
    pub fn granularity(pair: Pair) -> i64 {
        match pair {
            Pair::BtcJpy | Pair::EthJpy => AMOUNT_GRANULARITY,
        }
    }

    /// Get the current best bid (`data.buy`) for `pair` in whole JPY.
    ///
    /// GET /{pair}/ticker
    pub async fn get_price(&self, pair: Pair) -> Result<i64, ExchangeError> {
        let path = format!("/{}/ticker", pair.as_bitbank_str());
        let response = self
            .public
            .get(&path, None, None)
            .await
            .map_err(ExchangeError::Ticker)?;

        let ticker: TickerResponse = match response.json() {
            Ok(ticker) => ticker,
            Err(_) if !response.is_success() => {
                return Err(ExchangeError::TickerRejected {
                    code: None,
                    message: format!("HTTP {}: {}", response.status, response.body),
                })
            }
            Err(e) => return Err(ExchangeError::Ticker(e)),
        };

        if ticker.success != 1 || !response.is_success() {
            return Err(ExchangeError::TickerRejected {
                code: ticker.data.code,
                message: rejection_message(ticker.data.code),
            });
        }

        let buy = ticker
            .data
            .buy
            .ok_or_else(|| ExchangeError::InvalidPrice("missing buy price".into()))?;
        let price = parse_price(&buy)?;

        tracing::debug!(pair = %pair, price = price, "Ticker received");
        Ok(price)
    }

    /// Submit a signed market buy for `amount` of `pair`.
    ///
    /// POST /user/spot/order
    async fn place_market_buy(
        &mut self,
        pair: Pair,
        amount: Decimal,
    ) -> Result<OrderOutcome, ExchangeError> {
        let body = serde_json::to_string(&OrderRequest {
            pair: pair.as_bitbank_str(),
            amount: amount.to_string(),
            side: "buy",
            order_type: "market",
        })?;

        let nonce = self.nonce.next().to_string();
        let signature =
            RequestSigner::new(&self.credentials).sign_parts(&[nonce.as_str(), body.as_str()]);

        let headers = [
            ("ACCESS-KEY", self.credentials.api_key()),
            ("ACCESS-NONCE", nonce.as_str()),
            ("ACCESS-SIGNATURE", signature.as_str()),
        ];

        tracing::info!(
            pair = %pair,
            amount = %amount,
            nonce = %nonce,
            "Placing market buy"
        );

        let response = self
            .private
            .post_json(ORDER_PATH, body, Some(&headers[..]))
            .await
            .map_err(ExchangeError::Order)?;

        let order: OrderResponse = match response.json() {
            Ok(order) => order,
            Err(_) if !response.is_success() => {
                return Err(ExchangeError::OrderRejected {
                    status: response.status,
                    code: None,
                    message: response.body,
                })
            }
            Err(e) => return Err(ExchangeError::Order(e)),
        };

        if order.success != 1 || !response.is_success() {
            return Err(ExchangeError::OrderRejected {
                status: response.status,
                code: order.data.code,
                message: rejection_message(order.data.code),
            });
        }

        tracing::info!(
            pair = %pair,
            order_id = ?order.data.order_id,
            status = ?order.data.status,
            executed_amount = ?order.data.executed_amount,
            average_price = ?order.data.average_price,
            "Order placed"
        );

        Ok(match (order.data.executed_amount, order.data.average_price) {
            (Some(executed_amount), Some(average_price)) => OrderOutcome::Filled {
                executed_amount,
                average_price,
            },
            _ => OrderOutcome::Accepted {
                acceptance_id: order.data.order_id.map(|id| id.to_string()),
            },
        })
    }
}

#[async_trait]
impl DcaClient for BitbankClient {
    fn exchange(&self) -> Exchange {
        Exchange::Bitbank
    }

    async fn order(&mut self, pair: Pair, budget: i64) -> Result<OrderOutcome, ExchangeError> {
        let price = self.get_price(pair).await?;
        let amount = common::calc_amount(price, budget, Self::granularity(pair))?;

        if amount.is_zero() {
            tracing::warn!(
                pair = %pair,
                budget = budget,
                price = price,
                "Amount is too small, skipping"
            );
            return Ok(OrderOutcome::Skipped);
        }

        self.place_market_buy(pair, amount).await
    }
}

impl std::fmt::Debug for BitbankClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitbankClient")
            .field("public_url", &self.public.base_url())
            .field("private_url", &self.private.base_url())
            .field("api_key", &self.credentials.api_key())
            .field("nonce", &self.nonce.last())
            .finish()
    }
}

/// Parse a decimal price string into positive whole JPY.
fn parse_price(raw: &str) -> Result<i64, ExchangeError> {
    let price = raw
        .parse::<Decimal>()
        .map_err(|e| ExchangeError::InvalidPrice(format!("{raw}: {e}")))?
        .trunc()
        .to_i64()
        .ok_or_else(|| ExchangeError::InvalidPrice(format!("{raw}: out of range")))?;

    if price <= 0 {
        return Err(ExchangeError::InvalidPrice(format!("{raw}: not positive")));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::mock::MockTransport;
    use rust_decimal_macros::dec;

    const TICKER_OK: &str = r#"{"success":1,"data":{"sell":"5000100","buy":"5000000","last":"5000050"}}"#;

    fn client(mock: &Arc<MockTransport>) -> BitbankClient {
        let creds = ApiCredentials::new("test-key".into(), "test-secret".into());
        BitbankClient::with_transport(creds, mock.clone())
            .with_nonce(NonceCounter::starting_at(1_700_000_000))
    }

    fn filled_body(amount: &str, price: &str) -> String {
        format!(
            r#"{{"success":1,"data":{{"order_id":42,"pair":"btc_jpy","side":"buy","type":"market","executed_amount":"{amount}","average_price":"{price}","status":"FULLY_FILLED"}}}}"#
        )
    }

    #[tokio::test]
    async fn test_order_btc_success() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        mock.push_response(200, &filled_body("0.0020", "5000010"));
        let mut client = client(&mock);

        let outcome = client.order_btc(10_000).await.unwrap();
        assert_eq!(
            outcome,
            OrderOutcome::Filled {
                executed_amount: dec!(0.0020),
                average_price: dec!(5000010),
            }
        );

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://public.bitbank.cc/btc_jpy/ticker");
        assert_eq!(requests[1].url, "https://api.bitbank.cc/v1/user/spot/order");

        let body = requests[1].body.as_deref().unwrap();
        assert_eq!(
            body,
            r#"{"pair":"btc_jpy","amount":"0.0020","side":"buy","type":"market"}"#
        );
    }

    #[tokio::test]
    async fn test_order_headers_are_signed() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        mock.push_response(200, &filled_body("0.0020", "5000010"));
        let mut client = client(&mock);

        client.order_btc(10_000).await.unwrap();

        let order = &mock.requests()[1];
        let body = order.body.as_deref().unwrap();
        assert_eq!(order.header("ACCESS-KEY"), Some("test-key"));
        assert_eq!(order.header("ACCESS-NONCE"), Some("1700000001"));
        assert_eq!(
            order.header("ACCESS-SIGNATURE"),
            Some(auth::sign(&format!("1700000001{body}"), "test-secret").as_str())
        );
        assert_eq!(order.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_order_eth_uses_eth_pair() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, r#"{"success":1,"data":{"buy":"300000"}}"#);
        mock.push_response(200, &filled_body("0.0333", "300001"));
        let mut client = client(&mock);

        client.order_eth(10_000).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].url, "https://public.bitbank.cc/eth_jpy/ticker");
        assert!(requests[1]
            .body
            .as_deref()
            .unwrap()
            .contains(r#""pair":"eth_jpy","amount":"0.0333""#));
    }

    #[tokio::test]
    async fn test_small_budget_skips_order() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        let mut client = client(&mock);

        // 100 / 5_000_000 = 0.2 lots
        let outcome = client.order_btc(100).await.unwrap();
        assert_eq!(outcome, OrderOutcome::Skipped);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_ticker_failure_prevents_order() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, r#"{"success":0,"data":{"code":10000}}"#);
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::TickerRejected {
                code: Some(10000),
                ..
            }
        ));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_ticker_unparsable_body() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "<html>maintenance</html>");
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        assert!(err.is_decode());
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_ticker_http_error_without_json() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(503, "Service Unavailable");
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        match err {
            ExchangeError::TickerRejected { code, message } => {
                assert_eq!(code, None);
                assert_eq!(message, "HTTP 503: Service Unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_ticker_bad_price() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, r#"{"success":1,"data":{"buy":"n/a"}}"#);
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidPrice(_)));
    }

    #[tokio::test]
    async fn test_ticker_network_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_error(RestError::Connection("refused".into()));
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        assert!(matches!(err, ExchangeError::Ticker(RestError::Connection(_))));
    }

    #[tokio::test]
    async fn test_order_rejected_carries_code() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        mock.push_response(200, r#"{"success":0,"data":{"code":60001}}"#);
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        assert_eq!(err.code(), Some(60001));
        let message = err.to_string();
        assert!(message.contains("60001"), "{message}");
        assert!(message.contains("insufficient balance"), "{message}");
    }

    #[tokio::test]
    async fn test_order_http_error_without_json() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        mock.push_response(502, "Bad Gateway");
        let mut client = client(&mock);

        let err = client.order_btc(10_000).await.unwrap_err();
        match err {
            ExchangeError::OrderRejected {
                status, message, ..
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_order_without_fill_detail_is_accepted() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, TICKER_OK);
        mock.push_response(200, r#"{"success":1,"data":{"order_id":7,"status":"UNFILLED"}}"#);
        let mut client = client(&mock);

        let outcome = client.order_btc(10_000).await.unwrap();
        assert_eq!(
            outcome,
            OrderOutcome::Accepted {
                acceptance_id: Some("7".into())
            }
        );
    }

    #[tokio::test]
    async fn test_nonce_increases_across_orders() {
        let mock = Arc::new(MockTransport::new());
        for _ in 0..2 {
            mock.push_response(200, TICKER_OK);
            mock.push_response(200, &filled_body("0.0020", "5000010"));
        }
        let mut client = client(&mock);

        client.order_btc(10_000).await.unwrap();
        client.order_eth(10_000).await.unwrap();

        let nonces: Vec<i64> = mock
            .requests()
            .iter()
            .filter_map(|r| r.header("ACCESS-NONCE"))
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(nonces, vec![1_700_000_001, 1_700_000_002]);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("5000000").unwrap(), 5_000_000);
        assert_eq!(parse_price("312456.7").unwrap(), 312_456);
        assert!(parse_price("0").is_err());
        assert!(parse_price("-1").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let mock = Arc::new(MockTransport::new());
        let debug = format!("{:?}", client(&mock));
        assert!(debug.contains("test-key"));
        assert!(!debug.contains("test-secret"));
    }
}
