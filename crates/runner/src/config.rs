//! Run configuration from environment variables.

use model::{Exchange, ParseExchangeError};
use std::num::ParseIntError;
use thiserror::Error;

const EXCHANGE_VAR: &str = "EXCHANGE";
const BTC_BUDGET_VAR: &str = "BTC_YEN";
const ETH_BUDGET_VAR: &str = "ETH_YEN";

/// Errors in the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Failed to parse {var}={value:?}: {source}")]
    InvalidBudget {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} must not be negative, got {value}")]
    NegativeBudget { var: &'static str, value: i64 },

    #[error(transparent)]
    UnknownExchange(#[from] ParseExchangeError),
}

/// Which exchange to use and how much JPY to spend per asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcaConfig {
    pub exchange: Exchange,
    pub btc_budget: i64,
    pub eth_budget: i64,
}

impl DcaConfig {
    /// Load from `EXCHANGE`, `BTC_YEN` and `ETH_YEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let exchange = lookup(EXCHANGE_VAR)
            .ok_or(ConfigError::MissingEnvVar(EXCHANGE_VAR))?
            .parse()?;

        Ok(Self {
            exchange,
            btc_budget: parse_budget(&lookup, BTC_BUDGET_VAR)?,
            eth_budget: parse_budget(&lookup, ETH_BUDGET_VAR)?,
        })
    }
}

fn parse_budget<F>(lookup: &F, var: &'static str) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).ok_or(ConfigError::MissingEnvVar(var))?;
    let budget = value
        .trim()
        .parse::<i64>()
        .map_err(|source| ConfigError::InvalidBudget {
            var,
            value: value.clone(),
            source,
        })?;

    if budget < 0 {
        return Err(ConfigError::NegativeBudget { var, value: budget });
    }
    Ok(budget)
}
