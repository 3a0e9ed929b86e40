//! Exchange-agnostic client interface for dollar-cost-averaging buys.
//!
//! Each supported exchange implements [`DcaClient`]; the runner only ever
//! sees a `Box<dyn DcaClient>` produced by the client factory.

mod client;
mod error;

pub use client::{BoxedClient, DcaClient};
pub use error::ExchangeError;
