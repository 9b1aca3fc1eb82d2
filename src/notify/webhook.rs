//! Discord-style webhook notifier: one JSON `{"content": ...}` POST.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::json;
use tracing::info;

use super::Notifier;
use crate::config::GlobalConfig;
use crate::{AppError, Result};

/// Posts messages to a webhook URL.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Build a notifier for the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if no webhook URL was loaded or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        if config.webhook_url.is_empty() {
            return Err(AppError::Config("webhook url not loaded".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .build()
            .map_err(|err| AppError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            url: config.webhook_url.clone(),
        })
    }

    async fn post(&self, message: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "content": message }))
            .send()
            .await
            .map_err(|err| {
                AppError::Notify(format!("failed to post webhook: {}", err.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Notify(format!("webhook rejected message: {status}")));
        }

        info!("notification sent");
        Ok(())
    }
}

impl Notifier for WebhookNotifier {
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.post(message))
    }
}
