//! Isolates the status sentence from the page text.

use tracing::{debug, warn};

use super::find_ci;

/// Which bounds were found when cutting the segment.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SegmentKind {
    /// Open and end markers both matched.
    Bounded,
    /// Open marker matched; the segment runs to the end of the text.
    OpenEnded,
    /// Open marker missing; the segment is the full text.
    Unanchored,
}

/// A trimmed slice of the raw status text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment<'a> {
    /// Segment text, whitespace-trimmed.
    pub text: &'a str,
    /// How the segment was bounded.
    pub kind: SegmentKind,
}

/// Cut the status segment out of `raw`.
///
/// The segment starts right after the first `open_marker`. It ends at the
/// first `end_marker` after that point, or at the end of the text when no
/// end marker is configured or found. Without an open marker the whole text
/// is returned. An empty `end_marker` counts as not configured.
#[must_use]
pub fn extract_segment<'a>(raw: &'a str, open_marker: &str, end_marker: Option<&str>) -> Segment<'a> {
    let Some(open_at) = find_ci(raw, open_marker) else {
        warn!(open_marker, "open marker not found, using full status text");
        return Segment {
            text: raw.trim(),
            kind: SegmentKind::Unanchored,
        };
    };

    let rest = &raw[open_at + open_marker.len()..];

    match end_marker.filter(|marker| !marker.is_empty()) {
        Some(marker) => match find_ci(rest, marker) {
            Some(end_at) => Segment {
                text: rest[..end_at].trim(),
                kind: SegmentKind::Bounded,
            },
            None => {
                debug!(end_marker = marker, "end marker not found, segment runs to end of text");
                Segment {
                    text: rest.trim(),
                    kind: SegmentKind::OpenEnded,
                }
            }
        },
        None => Segment {
            text: rest.trim(),
            kind: SegmentKind::OpenEnded,
        },
    }
}
