//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod message;
pub mod status;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use identifiers::{InvalidMessageId, MessageId};
pub use key_action::KeyAction;
pub use message::{ContentPart, MessageSnapshot, ReasoningFragment};
pub use status::{MessageStreamStatus, PartStatus};
