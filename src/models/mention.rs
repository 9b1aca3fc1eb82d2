//! Mention tokens and the lookup tables that resolve them.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::config::GlobalConfig;

/// Destination of a notification, as rendered into the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mention {
    /// Token taken verbatim from configuration (e.g. `<@&622615034157203469>`).
    Lookup(String),
    /// No table entry matched; rendered as `@<name>`.
    Literal(String),
}

impl Display for Mention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(token) => f.write_str(token),
            Self::Literal(name) => write!(f, "@{name}"),
        }
    }
}

/// Immutable owner and team lookup tables.
///
/// Resolution order is fixed: owner handle, then team name, then a literal
/// `@<team>` fallback.
#[derive(Debug, Clone, Default)]
pub struct MentionBook {
    owners: HashMap<String, String>,
    teams: HashMap<String, String>,
}

impl MentionBook {
    /// Build a book from owner-handle and team-name tables.
    #[must_use]
    pub fn new(owners: HashMap<String, String>, teams: HashMap<String, String>) -> Self {
        Self { owners, teams }
    }

    /// Copy the `[owners]` and `[teams]` tables out of the configuration.
    #[must_use]
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.owners.clone(), config.teams.clone())
    }

    /// Resolve the mention for a team and its optional owner handle.
    #[must_use]
    pub fn resolve(&self, owner_handle: Option<&str>, team_name: &str) -> Mention {
        owner_handle
            .and_then(|handle| self.owners.get(handle))
            .or_else(|| self.teams.get(team_name))
            .map_or_else(
                || Mention::Literal(team_name.to_owned()),
                |token| Mention::Lookup(token.clone()),
            )
    }
}
