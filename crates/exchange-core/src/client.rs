//! The capability set shared by all exchange clients.

use async_trait::async_trait;
use model::{Exchange, OrderOutcome, Pair};

use crate::error::ExchangeError;

/// A client able to market-buy BTC and ETH for a JPY budget.
///
/// Implementations own a nonce counter, hence `&mut self`. A client must
/// not be driven from more than one task at a time.
///
/// # Protocol
///
/// `order` fetches the ticker, sizes the order, and skips when the size
/// rounds to zero (returning [`OrderOutcome::Skipped`]). Otherwise it signs
/// and submits a market buy, mapping any failure to [`ExchangeError`].
#[async_trait]
pub trait DcaClient: Send {
    /// The exchange this client talks to.
    fn exchange(&self) -> Exchange;

    /// Market-buy `pair` for roughly `budget` JPY.
    async fn order(&mut self, pair: Pair, budget: i64) -> Result<OrderOutcome, ExchangeError>;

    /// Market-buy BTC for roughly `budget` JPY.
    async fn order_btc(&mut self, budget: i64) -> Result<OrderOutcome, ExchangeError> {
        self.order(Pair::BtcJpy, budget).await
    }

    /// Market-buy ETH for roughly `budget` JPY.
    async fn order_eth(&mut self, budget: i64) -> Result<OrderOutcome, ExchangeError> {
        self.order(Pair::EthJpy, budget).await
    }
}

/// A boxed client trait object.
pub type BoxedClient = Box<dyn DcaClient>;

impl std::fmt::Debug for dyn DcaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DcaClient")
            .field("exchange", &self.exchange())
            .finish()
    }
}
