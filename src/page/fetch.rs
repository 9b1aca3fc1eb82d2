//! HTTP-backed [`StatusSource`].

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::{debug, warn};

use super::{html, StatusSource};
use crate::config::GlobalConfig;
use crate::{AppError, Result};

/// Text returned when the page no longer has the status element.
///
/// It flows through change detection like any other degraded message, so a
/// page redesign is reported once.
pub const STATUS_NOT_FOUND: &str = "Draft status div not found.";

/// Fetches the league page and reduces it to the status element's text.
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: String,
    status_tag: String,
    status_class: String,
}

impl HttpStatusSource {
    /// Build a source from the page URL, user agent, timeout and status element.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.http.user_agent.clone())
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .build()
            .map_err(|err| AppError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            url: config.league_url.clone(),
            status_tag: config.page.status_tag.clone(),
            status_class: config.page.status_class.clone(),
        })
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to fetch {}: {err}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!(
                "unexpected status {status} from {}",
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to read page body: {err}")))?;
        debug!(bytes = body.len(), "fetched status page");

        let text = html::element_text_by_class(&body, &self.status_tag, &self.status_class);
        Ok(text.unwrap_or_else(|| {
            warn!(
                tag = %self.status_tag,
                class = %self.status_class,
                "status element not found on page"
            );
            STATUS_NOT_FOUND.to_owned()
        }))
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch_status_text(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        Box::pin(self.fetch())
    }
}
