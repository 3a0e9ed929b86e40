//! bitbank API request and response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /user/spot/order`.
///
/// Field order matters: the serialized bytes are what gets signed.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrderRequest<'a> {
    pub pair: &'a str,
    pub amount: String,
    pub side: &'static str,
    #[serde(rename = "type")]
    pub order_type: &'static str,
}

/// Response from `GET /{pair}/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    pub success: i32,
    pub data: TickerData,
}

/// Ticker payload; on failure only `code` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerData {
    /// Best bid, as a decimal string.
    #[serde(default)]
    pub buy: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

/// Response from `POST /user/spot/order`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub success: i32,
    pub data: OrderData,
}

/// Order payload; on failure only `code` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderData {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub executed_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub average_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serialize_order_request() {
        let request = OrderRequest {
            pair: "btc_jpy",
            amount: "0.0010".to_string(),
            side: "buy",
            order_type: "market",
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"pair":"btc_jpy","amount":"0.0010","side":"buy","type":"market"}"#
        );
    }

    #[test]
    fn test_deserialize_ticker() {
        let json = r#"{
            "success": 1,
            "data": {
                "sell": "5000100",
                "buy": "5000000",
                "high": "5100000",
                "low": "4900000",
                "open": "4950000",
                "last": "5000050",
                "vol": "123.4567",
                "timestamp": 1700000000000
            }
        }"#;

        let ticker: TickerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.success, 1);
        assert_eq!(ticker.data.buy.as_deref(), Some("5000000"));
        assert_eq!(ticker.data.code, None);
    }

    #[test]
    fn test_deserialize_ticker_failure() {
        let ticker: TickerResponse =
            serde_json::from_str(r#"{"success":0,"data":{"code":10000}}"#).unwrap();
        assert_eq!(ticker.success, 0);
        assert_eq!(ticker.data.code, Some(10000));
        assert!(ticker.data.buy.is_none());
    }

    #[test]
    fn test_deserialize_order_response() {
        let json = r#"{
            "success": 1,
            "data": {
                "order_id": 1234567890,
                "pair": "btc_jpy",
                "side": "buy",
                "type": "market",
                "start_amount": "0.0010",
                "remaining_amount": "0.0000",
                "executed_amount": "0.0010",
                "price": null,
                "average_price": "5000123",
                "ordered_at": 1700000000000,
                "status": "FULLY_FILLED"
            }
        }"#;

        let order: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(order.success, 1);
        assert_eq!(order.data.order_id, Some(1234567890));
        assert_eq!(order.data.executed_amount, Some(dec!(0.0010)));
        assert_eq!(order.data.average_price, Some(dec!(5000123)));
        assert_eq!(order.data.status.as_deref(), Some("FULLY_FILLED"));
    }

    #[test]
    fn test_deserialize_order_failure() {
        let order: OrderResponse =
            serde_json::from_str(r#"{"success":0,"data":{"code":60001}}"#).unwrap();
        assert_eq!(order.success, 0);
        assert_eq!(order.data.code, Some(60001));
        assert!(order.data.executed_amount.is_none());
    }

    #[test]
    fn test_deserialize_order_null_amounts() {
        let order: OrderResponse = serde_json::from_str(
            r#"{"success":1,"data":{"order_id":9,"executed_amount":null,"average_price":null}}"#,
        )
        .unwrap();
        assert!(order.data.executed_amount.is_none());
        assert!(order.data.average_price.is_none());
    }

    #[test]
    fn test_deserialize_order_bad_decimal() {
        let result = serde_json::from_str::<OrderResponse>(
            r#"{"success":1,"data":{"executed_amount":"abc"}}"#,
        );
        assert!(result.is_err());
    }
}
