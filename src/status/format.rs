//! Renders a parsed status into the message that change detection compares.

use crate::models::draft::ParsedStatus;

/// Discord inline timestamp for `epoch` in short date-time style.
#[must_use]
pub fn timestamp_token(epoch: i64) -> String {
    format!("<t:{epoch}:f>")
}

/// Render a parsed status as a single message string.
///
/// A degraded status is returned unchanged.
#[must_use]
pub fn render(status: &ParsedStatus) -> String {
    match status {
        ParsedStatus::Turn(turn) => {
            let who = match turn.owner_display() {
                Some(owner) => format!("{}{} {owner}", turn.due_prefix, turn.mention),
                None => format!("{}{}", turn.due_prefix, turn.mention),
            };
            format!(
                "{who} are on the clock!\nNext pick due: {}",
                timestamp_token(turn.epoch_seconds())
            )
        }
        ParsedStatus::Degraded(text) => text.clone(),
    }
}

/// Text actually delivered: the header line, then the message.
///
/// The header is never part of the persisted state.
#[must_use]
pub fn notification_body(header: &str, message: &str) -> String {
    if header.is_empty() {
        message.to_owned()
    } else {
        format!("{header}\n{message}")
    }
}
