//! Reasoning fragment aggregation (pure).
//!
//! Extracts the reasoning subsequence from a message's content parts and
//! merges it into the single block the panel displays.

use crate::model::{ContentPart, MessageStreamStatus, ReasoningFragment};

/// Separator placed between adjacent fragments: exactly one blank line.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Ordered subsequence of reasoning fragments.
///
/// Non-reasoning parts are skipped; relative order is preserved.
pub fn extract_fragments(parts: &[ContentPart]) -> Vec<&ReasoningFragment> {
    parts.iter().filter_map(ContentPart::as_reasoning).collect()
}

/// Join fragment texts with [`FRAGMENT_SEPARATOR`].
///
/// Texts are taken verbatim: no trimming, escaping, or truncation, and no
/// leading or trailing separator.
pub fn join_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a ReasoningFragment>,
{
    fragments
        .into_iter()
        .map(ReasoningFragment::text)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Aggregated reasoning for one message snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReasoningView {
    fragments: Vec<ReasoningFragment>,
    text: String,
    any_in_progress: bool,
}

impl ReasoningView {
    /// Aggregate the reasoning parts of `parts`.
    pub fn from_parts(parts: &[ContentPart]) -> Self {
        let fragments = extract_fragments(parts);
        let text = join_fragments(fragments.iter().copied());
        let any_in_progress = fragments.iter().any(|f| f.in_progress());

        Self {
            fragments: fragments.into_iter().cloned().collect(),
            text,
            any_in_progress,
        }
    }

    /// Fragments in content order.
    pub fn fragments(&self) -> &[ReasoningFragment] {
        &self.fragments
    }

    /// Concatenated display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the message has no reasoning fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True if at least one fragment is still being written.
    pub fn any_in_progress(&self) -> bool {
        self.any_in_progress
    }

    /// Derived streaming signal: message running and some fragment in progress.
    pub fn is_streaming(&self, status: MessageStreamStatus) -> bool {
        status.is_running() && self.any_in_progress
    }
}
