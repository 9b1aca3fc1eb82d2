//! Per-invocation pipeline sequencing.

pub mod watcher;

pub use watcher::Watcher;

/// What a run is allowed to do once the message is known.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RunMode {
    /// Notify on change, then persist.
    #[default]
    Notify,
    /// Compute and log the message only.
    DryRun,
    /// Persist on change without notifying (primes a fresh deployment).
    RecordOnly,
}

/// Result of one completed run. Each variant carries the computed message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RunOutcome {
    /// Message matched the stored state; nothing was sent or written.
    Unchanged(String),
    /// Message was delivered and then stored.
    Notified(String),
    /// Message was stored without delivery.
    Recorded(String),
    /// Dry run; nothing was sent or written.
    Preview(String),
}

impl RunOutcome {
    /// The message computed during the run.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unchanged(msg) | Self::Notified(msg) | Self::Recorded(msg) | Self::Preview(msg) => {
                msg
            }
        }
    }
}
