//! Draft-turn grammar: segment → {who, when} → {mention, instant}.
//!
//! Every stage returns `Result<_, ParseFailure>`; [`DraftParser::parse`] is the
//! single place a failure turns into a degraded message.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Weekday};
use chrono_tz::Tz;
use regex::Regex;
use tracing::{debug, warn};

use super::find_ci;
use crate::config::DraftConfig;
use crate::models::draft::{DraftTurn, ParsedStatus};
use crate::models::mention::MentionBook;
use crate::{AppError, Result};

/// Leading article kept as a display prefix.
const ARTICLE: &str = "The ";

/// Accepted date layouts, tried in order once commas, `at` and a leading
/// weekday have been removed. `%B` also accepts abbreviated month names.
const DATE_LAYOUTS: &[&str] = &[
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%m-%d-%y",
    "%Y-%m-%d",
    "%B %d %Y",
    "%d %B %Y",
];

/// Accepted time layouts, paired with every date layout.
const TIME_LAYOUTS: &[&str] = &[
    "%I:%M %p",
    "%I:%M%p",
    "%I:%M:%S %p",
    "%I:%M:%S%p",
    "%I %p",
    "%I%p",
    "%H:%M",
    "%H:%M:%S",
];

/// Years below this are two-digit years misread by a `%Y` layout.
const MIN_PLAUSIBLE_YEAR: i32 = 1970;

/// Reason a clause could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Nothing left of the who-clause once prefix, handle and phrase were removed.
    MissingTeam,
    /// No date layout matched the when-clause.
    UnparseableDate(String),
    /// The local time does not exist in the reference zone (spring-forward gap).
    NonexistentLocalTime(String),
}

impl Display for ParseFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTeam => write!(f, "who-clause has no team name"),
            Self::UnparseableDate(text) => write!(f, "unrecognised due date '{text}'"),
            Self::NonexistentLocalTime(text) => {
                write!(f, "due date '{text}' does not exist in the reference zone")
            }
        }
    }
}

/// Who-clause after stripping.
#[derive(Debug)]
struct WhoClause {
    label: String,
    prefix: &'static str,
    owner_handle: Option<String>,
    team_name: String,
}

/// Parser for the on-the-clock sentence.
#[derive(Debug, Clone)]
pub struct DraftParser {
    anchor: String,
    clock_phrase: String,
    zone: Tz,
    abbreviations: Option<Regex>,
    owner_pattern: Regex,
    connective: Regex,
    mentions: MentionBook,
}

impl DraftParser {
    /// Build a parser from the draft grammar settings and the mention tables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the reference zone is unknown or a
    /// pattern fails to compile.
    pub fn new(config: &DraftConfig, mentions: MentionBook) -> Result<Self> {
        let zone = config.zone()?;

        let tokens: Vec<String> = config
            .zone_abbreviations
            .iter()
            .map(|abbr| abbr.trim())
            .filter(|abbr| !abbr.is_empty())
            .map(regex::escape)
            .collect();
        let abbreviations = if tokens.is_empty() {
            None
        } else {
            Some(compile(&format!(r"\b(?:{})\b", tokens.join("|")))?)
        };

        Ok(Self {
            anchor: config.anchor.clone(),
            clock_phrase: config.clock_phrase.trim().to_owned(),
            zone,
            abbreviations,
            owner_pattern: compile(r"\s*\(([^()]*)\)\s*")?,
            connective: compile(r"(?i)\s+at\s+")?,
            mentions,
        })
    }

    /// Parse a status segment.
    ///
    /// Without the anchor phrase the segment is returned verbatim. Any
    /// failure while resolving the clauses also returns the segment verbatim.
    #[must_use]
    pub fn parse(&self, segment: &str) -> ParsedStatus {
        let Some((who, when)) = self.split_clauses(segment) else {
            debug!(anchor = %self.anchor, "anchor not found, passing segment through");
            return ParsedStatus::Degraded(segment.to_owned());
        };

        match self.parse_turn(who, when) {
            Ok(turn) => {
                debug!(
                    team = %turn.team_name,
                    owner = ?turn.owner_handle,
                    due = %turn.due_at,
                    "parsed draft turn"
                );
                ParsedStatus::Turn(turn)
            }
            Err(failure) => {
                warn!(%failure, "could not parse draft turn, defaulting to plain text");
                ParsedStatus::Degraded(segment.to_owned())
            }
        }
    }

    fn split_clauses<'a>(&self, segment: &'a str) -> Option<(&'a str, &'a str)> {
        let at = find_ci(segment, &self.anchor)?;
        Some((&segment[..at], &segment[at + self.anchor.len()..]))
    }

    fn parse_turn(&self, who: &str, when: &str) -> std::result::Result<DraftTurn, ParseFailure> {
        let who = self.parse_who(who)?;
        let (due_at, raw_date_token) = self.parse_when(when)?;
        let mention = self
            .mentions
            .resolve(who.owner_handle.as_deref(), &who.team_name);

        Ok(DraftTurn {
            team_label: who.label,
            team_name: who.team_name,
            owner_handle: who.owner_handle,
            due_prefix: who.prefix.to_owned(),
            mention,
            due_at,
            raw_date_token,
        })
    }

    fn parse_who(&self, clause: &str) -> std::result::Result<WhoClause, ParseFailure> {
        let mut label = clause.trim().trim_end_matches('.').trim_end();
        if let Some(stripped) = strip_suffix_ci(label, &self.clock_phrase) {
            label = stripped.trim_end();
        }

        let (prefix, rest) = match label.strip_prefix(ARTICLE) {
            Some(rest) => (ARTICLE, rest),
            None => ("", label),
        };

        let (owner_handle, team_name) = match self.owner_pattern.captures(rest) {
            Some(caps) => {
                let span = caps.get(0).map_or(0..0, |m| m.range());
                let handle = caps
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .filter(|handle| !handle.is_empty())
                    .map(str::to_owned);
                let before = rest[..span.start].trim();
                let after = rest[span.end..].trim();
                let team = if before.is_empty() || after.is_empty() {
                    format!("{before}{after}")
                } else {
                    format!("{before} {after}")
                };
                (handle, team)
            }
            None => (None, rest.trim().to_owned()),
        };

        if team_name.is_empty() {
            return Err(ParseFailure::MissingTeam);
        }

        Ok(WhoClause {
            label: label.to_owned(),
            prefix,
            owner_handle,
            team_name,
        })
    }

    fn parse_when(&self, clause: &str) -> std::result::Result<(DateTime<Tz>, String), ParseFailure> {
        let mut text = clause
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());

        // The abbreviation only marks where the date ends; its offset is never used.
        if let Some(found) = self.abbreviations.as_ref().and_then(|re| re.find(text)) {
            text = text[..found.start()].trim_end();
        }

        let token = text.to_owned();
        let normalized = self.connective.replace_all(text, " ").replace(',', " ");
        let mut words: Vec<&str> = normalized.split_whitespace().collect();
        if words.first().is_some_and(|word| word.parse::<Weekday>().is_ok()) {
            words.remove(0);
        }
        let normalized = words.join(" ");

        let naive = parse_naive(&normalized).ok_or_else(|| ParseFailure::UnparseableDate(token.clone()))?;

        let due_at = self
            .zone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| ParseFailure::NonexistentLocalTime(token.clone()))?;

        Ok((due_at, token))
    }
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    DATE_LAYOUTS
        .iter()
        .flat_map(|date| TIME_LAYOUTS.iter().map(move |time| format!("{date} {time}")))
        .filter_map(|layout| NaiveDateTime::parse_from_str(text, &layout).ok())
        .find(|parsed| parsed.year() >= MIN_PLAUSIBLE_YEAR)
}

fn strip_suffix_ci<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() || text.len() < suffix.len() {
        return None;
    }
    let split = text.len() - suffix.len();
    if !text.is_char_boundary(split) {
        return None;
    }
    text[split..]
        .eq_ignore_ascii_case(suffix)
        .then(|| &text[..split])
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|err| AppError::Config(format!("invalid pattern '{pattern}': {err}")))
}
