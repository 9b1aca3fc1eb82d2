//! Notification delivery: the notify capability and the webhook implementation.

pub mod webhook;

use std::future::Future;
use std::pin::Pin;

use crate::Result;

pub use webhook::WebhookNotifier;

/// Delivers one formatted message to a chat channel.
pub trait Notifier: Send + Sync {
    /// Send `message`. Delivery is attempted once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Notify`](crate::AppError::Notify) when delivery fails.
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
