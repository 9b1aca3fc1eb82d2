//! Status text pipeline: segment extraction, draft-turn parsing, rendering.
//!
//! Each stage is infallible from the caller's point of view. Missing markers
//! widen the segment, unparseable clauses degrade to the segment text, and
//! rendering always yields exactly one message string.

pub mod extract;
pub mod format;
pub mod parse;

pub use extract::{extract_segment, Segment, SegmentKind};
pub use format::{notification_body, render};
pub use parse::{DraftParser, ParseFailure};

/// Byte offset of the first ASCII case-insensitive match of `needle`.
///
/// Lowercasing only touches ASCII bytes, so offsets into the lowered copy are
/// valid offsets into `haystack`.
pub(crate) fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}
