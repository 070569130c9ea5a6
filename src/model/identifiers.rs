//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Identifier of an assistant message.
///
/// A panel is associated with exactly one message; a snapshot carrying a
/// different id starts a new association.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Smart constructor: validates non-empty message ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidMessageId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidMessageId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection reasons for [`MessageId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMessageId {
    /// Empty string
    #[error("Message ID cannot be empty")]
    Empty,
}

// ===== Tests =====
