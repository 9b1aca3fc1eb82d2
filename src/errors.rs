//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering every failure that can end a run.
///
/// Parse problems are absent: the draft parser degrades to the
/// raw segment instead of failing, so they never reach this type.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing, validation, or credential failure.
    Config(String),
    /// Network or HTTP failure while retrieving the status page.
    Fetch(String),
    /// Webhook delivery failure.
    Notify(String),
    /// Reading or writing the persisted status file failed.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Fetch(msg) => write!(f, "fetch: {msg}"),
            Self::Notify(msg) => write!(f, "notify: {msg}"),
            Self::State(msg) => write!(f, "state: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}
