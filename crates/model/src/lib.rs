//! Value types shared by the exchange clients and the runner.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exchange {
    Bitbank,
    Bitflyer,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitbank => "bitbank",
            Self::Bitflyer => "bitflyer",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ParseExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bitbank" => Ok(Self::Bitbank),
            "bitflyer" => Ok(Self::Bitflyer),
            _ => Err(ParseExchangeError(s.to_string())),
        }
    }
}

/// Error parsing an exchange selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExchangeError(String);

impl fmt::Display for ParseExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown exchange '{}', expected 'bitbank' or 'bitflyer'",
            self.0
        )
    }
}

impl std::error::Error for ParseExchangeError {}

/// Base asset bought by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Btc,
    Eth,
}

impl Asset {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Trading pair quoted in JPY.
///
/// Each exchange spells pairs differently; use the exchange-specific
/// accessors when building URLs and request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pair {
    BtcJpy,
    EthJpy,
}

impl Pair {
    pub fn base(&self) -> Asset {
        match self {
            Self::BtcJpy => Asset::Btc,
            Self::EthJpy => Asset::Eth,
        }
    }

    /// Pair code as used by bitbank (`btc_jpy`).
    pub fn as_bitbank_str(&self) -> &'static str {
        match self {
            Self::BtcJpy => "btc_jpy",
            Self::EthJpy => "eth_jpy",
        }
    }

    /// Product code as used by bitFlyer (`BTC_JPY`).
    pub fn as_bitflyer_str(&self) -> &'static str {
        match self {
            Self::BtcJpy => "BTC_JPY",
            Self::EthJpy => "ETH_JPY",
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/JPY", self.base())
    }
}

/// Result of a single market buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    /// Budget too small for the minimum lot; nothing was sent.
    Skipped,
    /// Order executed and the exchange reported the fill.
    Filled {
        executed_amount: Decimal,
        average_price: Decimal,
    },
    /// Order accepted, but the exchange does not report fill details.
    Accepted { acceptance_id: Option<String> },
}

impl OrderOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}
