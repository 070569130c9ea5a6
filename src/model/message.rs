//! Message snapshot types.
//!
//! A [`MessageSnapshot`] is the point-in-time read interface over the
//! upstream message store: an ordered, heterogeneous list of content parts
//! plus the overall message status. Nothing in this crate mutates a
//! snapshot once built.

use crate::model::{MessageId, MessageStreamStatus, PartStatus};

// ===== ReasoningFragment =====

/// One unit of reasoning text, possibly still being written.
///
/// Fragments are append-only from the upstream point of view; this crate
/// only reads and concatenates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningFragment {
    text: String,
    in_progress: bool,
}

impl ReasoningFragment {
    /// Fragment with explicit text and progress flag.
    pub fn new(text: impl Into<String>, in_progress: bool) -> Self {
        Self {
            text: text.into(),
            in_progress,
        }
    }

    /// Build a fragment from an upstream part status.
    pub fn with_status(text: impl Into<String>, status: &PartStatus) -> Self {
        Self::new(text, status.is_running())
    }

    /// Fragment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while upstream is still writing this fragment.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }
}

// ===== ContentPart =====

/// Individual content part of an assistant message.
///
/// Only reasoning parts carry meaning for the panel; the others are kept so
/// the answer can be shown and so relative order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// Reasoning ("thinking") content
    Reasoning(ReasoningFragment),
    /// Visible answer text
    Text {
        /// Answer text as emitted so far
        text: String,
    },
    /// Any other part kind (tool calls, images, sources, ...)
    Other {
        /// Upstream kind tag
        kind: String,
    },
}

impl ContentPart {
    /// Reasoning part.
    pub fn reasoning(text: impl Into<String>, in_progress: bool) -> Self {
        Self::Reasoning(ReasoningFragment::new(text, in_progress))
    }

    /// Answer text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Any other part kind, kept for ordering only.
    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }

    /// The reasoning fragment, if this is a reasoning part.
    pub fn as_reasoning(&self) -> Option<&ReasoningFragment> {
        match self {
            Self::Reasoning(fragment) => Some(fragment),
            _ => None,
        }
    }
}

// ===== MessageSnapshot =====

/// Snapshot of the current assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageSnapshot {
    id: Option<MessageId>,
    status: MessageStreamStatus,
    content: Vec<ContentPart>,
}

impl MessageSnapshot {
    /// Snapshot without a message id.
    pub fn new(status: MessageStreamStatus, content: Vec<ContentPart>) -> Self {
        Self {
            id: None,
            status,
            content,
        }
    }

    /// Attach a message id (builder pattern).
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Message id, if upstream sent one.
    pub fn id(&self) -> Option<&MessageId> {
        self.id.as_ref()
    }

    /// Overall message status.
    pub fn status(&self) -> MessageStreamStatus {
        self.status
    }

    /// Ordered content parts as supplied upstream.
    pub fn content(&self) -> &[ContentPart] {
        &self.content
    }

    /// Answer text: every text part joined with a blank line.
    pub fn answer_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
