//! Fetch → extract → parse → render → compare → notify → persist.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::{RunMode, RunOutcome};
use crate::config::{GlobalConfig, PageConfig};
use crate::models::mention::MentionBook;
use crate::notify::Notifier;
use crate::page::StatusSource;
use crate::persistence::StateStore;
use crate::status::{extract_segment, notification_body, render, DraftParser};
use crate::{AppError, Result};

/// Runs the status pipeline once per call.
///
/// Notification always precedes persistence: a crash between the two can
/// cause a repeated notification on the next run but never a lost one.
pub struct Watcher {
    source: Arc<dyn StatusSource>,
    notifier: Option<Arc<dyn Notifier>>,
    parser: DraftParser,
    store: StateStore,
    page: PageConfig,
    header: String,
}

impl Watcher {
    /// Assemble a watcher from configuration and its two collaborators.
    ///
    /// `notifier` may be `None` for dry-run and record-only use.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the draft parser cannot be built.
    pub fn new(
        config: &GlobalConfig,
        source: Arc<dyn StatusSource>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Result<Self> {
        let parser = DraftParser::new(&config.draft, MentionBook::from_config(config))?;
        Ok(Self {
            source,
            notifier,
            parser,
            store: StateStore::new(config.state_path.clone()),
            page: config.page.clone(),
            header: config.message_header.clone(),
        })
    }

    /// The state store this watcher compares against.
    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Turn raw status text into the trimmed message used for comparison.
    #[must_use]
    pub fn compose_message(&self, raw: &str) -> String {
        let segment = extract_segment(raw, &self.page.open_marker, self.page.end_marker.as_deref());
        debug!(kind = ?segment.kind, "status segment extracted");
        let parsed = self.parser.parse(segment.text);
        render(&parsed).trim().to_owned()
    }

    /// Execute one invocation.
    ///
    /// # Errors
    ///
    /// - `AppError::Config` if `mode` needs a notifier and none was given;
    ///   nothing is fetched.
    /// - `AppError::Fetch` if the page cannot be retrieved or is empty;
    ///   state is not touched.
    /// - `AppError::Notify` if delivery fails; state is not advanced.
    /// - `AppError::State` if the state file cannot be read or written.
    pub async fn run_once(&self, mode: RunMode) -> Result<RunOutcome> {
        let notifier = match (mode, &self.notifier) {
            (RunMode::Notify, None) => {
                return Err(AppError::Config(
                    "no notification destination configured".into(),
                ))
            }
            (RunMode::Notify, Some(notifier)) => Some(Arc::clone(notifier)),
            (RunMode::DryRun | RunMode::RecordOnly, _) => None,
        };

        let raw = self.source.fetch_status_text().await?;
        let message = self.compose_message(&raw);
        if message.is_empty() {
            return Err(AppError::Fetch("status text is empty".into()));
        }

        match notifier {
            Some(notifier) => self.notify_on_change(notifier.as_ref(), message).await,
            None if mode == RunMode::RecordOnly => {
                let changed = self.store.compare_and_update(&message)?;
                info!(changed, "status recorded without notification");
                Ok(if changed {
                    RunOutcome::Recorded(message)
                } else {
                    RunOutcome::Unchanged(message)
                })
            }
            None => {
                info!(%message, "dry run, nothing sent");
                Ok(RunOutcome::Preview(message))
            }
        }
    }

    async fn notify_on_change(&self, notifier: &dyn Notifier, message: String) -> Result<RunOutcome> {
        if !self.store.has_changed(&message)? {
            info!("no change detected");
            return Ok(RunOutcome::Unchanged(message));
        }

        info!("change detected");
        let body = notification_body(&self.header, &message);
        if let Err(err) = notifier.notify(&body).await {
            error!(%err, "notification failed, state not advanced");
            return Err(err);
        }

        self.store.save(&message)?;
        Ok(RunOutcome::Notified(message))
    }
}
