//! JSONL parser for message snapshots.
//!
//! This module provides pure parsing functions for converting JSONL lines
//! into [`MessageSnapshot`] values. Each line is one point-in-time snapshot
//! of the assistant message, in the shape upstream message stores use:
//!
//! ```json
//! {"id":"msg_1","status":{"type":"running"},
//!  "content":[{"type":"reasoning","text":"Step 1","status":{"type":"running"}}]}
//! ```
//!
//! Malformed upstream data is defaulted rather than rejected wherever a
//! sensible default exists: a reasoning part without `text` has empty text,
//! a part or message without `status` is not running, and unknown part kinds
//! are kept as [`ContentPart::Other`].

use crate::model::{
    ContentPart, MessageId, MessageSnapshot, MessageStreamStatus, ParseError, PartStatus,
    ReasoningFragment,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

// Part kind string constants
const PART_KIND_REASONING: &str = "reasoning";
const PART_KIND_TEXT: &str = "text";
const PART_KIND_UNKNOWN: &str = "unknown";

/// Raw JSON structure for deserializing a snapshot line.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    status: Option<RawStatus>,
    #[serde(default, deserialize_with = "lenient")]
    content: Option<RawContent>,
}

/// Status is either `{"type": "running"}` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Bare(String),
    Tagged {
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
}

impl RawStatus {
    fn kind(&self) -> Option<&str> {
        match self {
            RawStatus::Bare(kind) => Some(kind.as_str()),
            RawStatus::Tagged { kind } => kind.as_deref(),
        }
    }
}

/// Content is either a list of parts or a bare string (one text part).
///
/// Parts stay raw JSON until [`parse_part`] so one malformed part cannot
/// take down its siblings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Parts(Vec<serde_json::Value>),
}

#[derive(Debug, Default, Deserialize)]
struct RawPart {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    status: Option<RawStatus>,
}

/// Deserialize a field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Parse one JSONL line.
///
/// Returns `None` for blank lines, which carry no snapshot.
///
/// # Arguments
///
/// * `raw` - The line, without trailing newline
/// * `line_number` - 1-based line number for error reporting
pub fn parse_line(raw: &str, line_number: usize) -> Option<Result<MessageSnapshot, ParseError>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(parse_snapshot(raw, line_number))
}

/// Parse a single snapshot.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` for syntactically invalid JSON or JSON
/// that is not a snapshot object, and `ParseError::InvalidField` for an
/// empty message id.
pub fn parse_snapshot(raw: &str, line_number: usize) -> Result<MessageSnapshot, ParseError> {
    let raw_snapshot: RawSnapshot =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;

    let status = MessageStreamStatus::from_upstream(
        raw_snapshot.status.as_ref().and_then(RawStatus::kind),
    );

    let content = match raw_snapshot.content {
        None => Vec::new(),
        Some(RawContent::Text(text)) => vec![ContentPart::text(text)],
        Some(RawContent::Parts(parts)) => parts.into_iter().map(parse_part).collect(),
    };

    let snapshot = MessageSnapshot::new(status, content);

    match raw_snapshot.id {
        Some(id) => {
            let id = MessageId::new(id).map_err(|e| ParseError::InvalidField {
                line: line_number,
                field: "id",
                reason: e.to_string(),
            })?;
            Ok(snapshot.with_id(id))
        }
        None => Ok(snapshot),
    }
}

/// Convert one raw part. A part that is not an object becomes
/// `Other("unknown")`.
fn parse_part(value: serde_json::Value) -> ContentPart {
    let raw: RawPart = serde_json::from_value(value).unwrap_or_default();
    let kind = raw.kind.as_deref().unwrap_or(PART_KIND_UNKNOWN);
    match kind {
        PART_KIND_REASONING => {
            let status = PartStatus::from_upstream(raw.status.as_ref().and_then(RawStatus::kind));
            ContentPart::Reasoning(ReasoningFragment::with_status(
                raw.text.unwrap_or_default(),
                &status,
            ))
        }
        PART_KIND_TEXT => ContentPart::text(raw.text.unwrap_or_default()),
        other => ContentPart::other(other),
    }
}
