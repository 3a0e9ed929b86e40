//! bitFlyer Lightning REST client.
//!
//! - **Ticker**: `GET /v1/ticker?product_code={pair}`, last traded price `ltp`
//!   and market `state` (orders are only sent while `RUNNING`)
//! - **Order**: `POST /v1/me/sendchildorder`
//! - **Signing**: `ACCESS-SIGN = HMAC-SHA256(secret, timestamp + method + path + body)`
//!
//! bitFlyer reports no fill detail on order acceptance, so a successful
//! order yields `OrderOutcome::Accepted` with the acceptance id.

mod client;
mod responses;

pub use client::{BitflyerClient, API_URL};
pub use responses::{ErrorResponse, OrderAcceptedResponse, TickerResponse};
