//! Global configuration parsing, validation, and credential loading.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

use crate::{AppError, Result};

/// Environment variable holding the webhook destination.
///
/// The webhook URL embeds a secret token, so it is never read from the TOML
/// file.
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Outgoing HTTP settings shared by the page fetch and the webhook post.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// `User-Agent` header sent with the page request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/58.0.3029.110 Safari/537.36"
        .into()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Where the status sentence lives on the page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PageConfig {
    /// Tag name of the element holding the status text.
    #[serde(default = "default_status_tag")]
    pub status_tag: String,
    /// CSS class of the element holding the status text.
    #[serde(default = "default_status_class")]
    pub status_class: String,
    /// Marker after which the status segment begins.
    #[serde(default = "default_open_marker")]
    pub open_marker: String,
    /// Optional marker at which the status segment ends.
    #[serde(default)]
    pub end_marker: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            status_tag: default_status_tag(),
            status_class: default_status_class(),
            open_marker: default_open_marker(),
            end_marker: None,
        }
    }
}

fn default_status_tag() -> String {
    "div".into()
}

fn default_status_class() -> String {
    "alert-info".into()
}

fn default_open_marker() -> String {
    "is currently open.".into()
}

/// Grammar settings for the on-the-clock sentence.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DraftConfig {
    /// Phrase separating the who-clause from the when-clause.
    #[serde(default = "default_anchor")]
    pub anchor: String,
    /// Trailing phrase removed from the who-clause.
    #[serde(default = "default_clock_phrase")]
    pub clock_phrase: String,
    /// IANA zone the league schedules picks in.
    #[serde(default = "default_reference_zone")]
    pub reference_zone: String,
    /// Zone abbreviations used only as a truncation boundary.
    #[serde(default = "default_zone_abbreviations")]
    pub zone_abbreviations: Vec<String>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            clock_phrase: default_clock_phrase(),
            reference_zone: default_reference_zone(),
            zone_abbreviations: default_zone_abbreviations(),
        }
    }
}

impl DraftConfig {
    /// Resolve the configured reference zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the name is not a known IANA zone.
    pub fn zone(&self) -> Result<Tz> {
        self.reference_zone.parse::<Tz>().map_err(|_| {
            AppError::Config(format!(
                "unknown reference_zone '{}'",
                self.reference_zone
            ))
        })
    }
}

fn default_anchor() -> String {
    "Next pick due on".into()
}

fn default_clock_phrase() -> String {
    "are on the clock".into()
}

fn default_reference_zone() -> String {
    "America/Los_Angeles".into()
}

fn default_zone_abbreviations() -> Vec<String> {
    vec!["PST".into(), "PDT".into()]
}

fn default_state_path() -> PathBuf {
    PathBuf::from("last_status.txt")
}

fn default_message_header() -> String {
    "**Draft Update:**".into()
}

/// Global configuration parsed from `draft-watch.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Page carrying the draft status.
    pub league_url: String,
    /// File holding the last message that was sent.
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
    /// First line of every delivered notification; empty disables it.
    #[serde(default = "default_message_header")]
    pub message_header: String,
    /// Outgoing HTTP settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Status element and segment markers.
    #[serde(default)]
    pub page: PageConfig,
    /// On-the-clock sentence grammar.
    #[serde(default)]
    pub draft: DraftConfig,
    /// Owner handle to mention token.
    #[serde(default)]
    pub owners: HashMap<String, String>,
    /// Team name to mention token.
    #[serde(default)]
    pub teams: HashMap<String, String>,
    /// Webhook destination (populated at runtime).
    #[serde(skip)]
    pub webhook_url: String,
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::Config(format!("failed to read config {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the webhook destination from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DISCORD_WEBHOOK_URL` is unset or blank.
    pub fn load_credentials(&mut self) -> Result<()> {
        self.webhook_url = load_credential(WEBHOOK_ENV)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.league_url.trim().is_empty() {
            return Err(AppError::Config("league_url must not be empty".into()));
        }

        if self.page.open_marker.is_empty() {
            return Err(AppError::Config("page.open_marker must not be empty".into()));
        }

        if !is_tag_name(&self.page.status_tag) {
            return Err(AppError::Config(format!(
                "page.status_tag '{}' is not a valid tag name",
                self.page.status_tag
            )));
        }

        if self.page.status_class.trim().is_empty() {
            return Err(AppError::Config("page.status_class must not be empty".into()));
        }

        if self.draft.anchor.trim().is_empty() {
            return Err(AppError::Config("draft.anchor must not be empty".into()));
        }

        if self.http.timeout_seconds == 0 {
            return Err(AppError::Config(
                "http.timeout_seconds must be greater than zero".into(),
            ));
        }

        if self.page.end_marker.as_deref() == Some("") {
            warn!("page.end_marker is empty and will be ignored");
        }

        self.draft.zone()?;
        Ok(())
    }
}

fn is_tag_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn load_credential(env_key: &str) -> Result<String> {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        Ok(_) => Err(AppError::Config(format!("{env_key} is set but empty"))),
        Err(_) => Err(AppError::Config(format!("{env_key} not set"))),
    }
}
