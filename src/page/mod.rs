//! Status page access: the fetch capability and its HTTP implementation.

pub mod fetch;
pub mod html;

use std::future::Future;
use std::pin::Pin;

use crate::Result;

pub use fetch::HttpStatusSource;

/// Source of the raw status text consumed by the pipeline.
pub trait StatusSource: Send + Sync {
    /// Return the plain text of the status region.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`](crate::AppError::Fetch) when the page
    /// cannot be retrieved.
    fn fetch_status_text(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}
