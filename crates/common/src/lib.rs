//! Shared helpers: order-size calculation and logging setup.

mod amount;
mod logging;

pub use amount::{calc_amount, AmountError};
pub use logging::init_logging;
