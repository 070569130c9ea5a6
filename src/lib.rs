//! thinkview
//!
//! TUI for watching an assistant's reasoning stream. Each JSONL line is a
//! snapshot of the assistant message; the reasoning panel opens while
//! reasoning streams and closes once the answer is finalized, unless the
//! user has taken over.
//!
//! Pure core (`reasoning`, `state`, `parser`) with an impure shell
//! (`source`, `view`, `logging`).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod reasoning;
pub mod source;
pub mod state;
pub mod view;
