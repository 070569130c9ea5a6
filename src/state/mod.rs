//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod message_store;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, InputMode};
pub use message_store::{MessageStore, SnapshotObserver};
