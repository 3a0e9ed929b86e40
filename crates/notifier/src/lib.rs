//! Purchase notifications.
//!
//! [`format_summary`] renders the report for one run and a [`Notifier`]
//! delivers it. The production notifier pushes a LINE text message.

mod error;
mod line;
mod summary;

pub use error::NotifyError;
pub use line::{LineNotifier, LINE_API_URL};
pub use summary::format_summary;

use async_trait::async_trait;

/// Delivers a text message to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
