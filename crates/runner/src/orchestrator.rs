//! One DCA run: buy BTC, buy ETH, report.

use crate::config::{ConfigError, DcaConfig};
use auth::AuthError;
use client_factory::FactoryError;
use exchange_core::{DcaClient, ExchangeError};
use model::OrderOutcome;
use notifier::{format_summary, Notifier, NotifyError};
use thiserror::Error;

/// Any failure that aborts a run. The message names the failing stage.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("credentials error: {0}")]
    Credentials(#[from] AuthError),

    #[error("client error: {0}")]
    Client(#[from] FactoryError),

    #[error("BTC order failed: {0}")]
    BtcOrder(#[source] ExchangeError),

    #[error("ETH order failed: {0}")]
    EthOrder(#[source] ExchangeError),

    #[error("notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// What a completed run bought.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub btc: OrderOutcome,
    pub eth: OrderOutcome,
}

/// Place the BTC order, then the ETH order, then push the summary.
///
/// Stops at the first failure. An ETH failure after a successful BTC order
/// leaves the BTC order in place and nothing is notified.
pub async fn run(
    config: &DcaConfig,
    client: &mut dyn DcaClient,
    notifier: &dyn Notifier,
) -> Result<RunReport, RunError> {
    tracing::info!(
        exchange = %client.exchange(),
        btc_budget = config.btc_budget,
        eth_budget = config.eth_budget,
        "Starting DCA run"
    );

    let btc = client
        .order_btc(config.btc_budget)
        .await
        .map_err(RunError::BtcOrder)?;
    tracing::info!(outcome = ?btc, "BTC order done");

    let eth = client
        .order_eth(config.eth_budget)
        .await
        .map_err(RunError::EthOrder)?;
    tracing::info!(outcome = ?eth, "ETH order done");

    notifier.notify(&format_summary(&btc, &eth)).await?;

    Ok(RunReport { btc, eth })
}
