//! Parsed draft-turn record and the parser's result type.

use chrono::DateTime;
use chrono_tz::Tz;

use super::mention::Mention;

/// A fully resolved "who is on the clock, and until when" record.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTurn {
    /// Who-clause after the clock phrase was removed, before any stripping.
    pub team_label: String,
    /// Bare team name used for lookup and the literal fallback.
    pub team_name: String,
    /// Inner text of the parenthesised owner handle, if the page had one.
    pub owner_handle: Option<String>,
    /// `"The "` when the label began with the definite article, else empty.
    pub due_prefix: String,
    /// Resolved notification destination.
    pub mention: Mention,
    /// Pick deadline bound to the reference zone.
    pub due_at: DateTime<Tz>,
    /// The date text that was parsed, after abbreviation removal.
    pub raw_date_token: String,
}

impl DraftTurn {
    /// Deadline as seconds since the Unix epoch.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.due_at.timestamp()
    }

    /// Owner handle wrapped in parentheses, as shown on the page.
    #[must_use]
    pub fn owner_display(&self) -> Option<String> {
        self.owner_handle.as_ref().map(|handle| format!("({handle})"))
    }
}

/// Outcome of parsing a status segment.
///
/// Both variants are first-class messages: a degraded segment goes through
/// change detection exactly like a parsed turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedStatus {
    /// The segment matched the on-the-clock grammar.
    Turn(DraftTurn),
    /// The segment is passed through verbatim.
    Degraded(String),
}
