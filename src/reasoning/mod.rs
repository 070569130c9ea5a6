//! Reasoning panel core (pure).
//!
//! - [`aggregator`]: merges reasoning fragments into one display block
//! - [`controller`]: edge-triggered open/closed state machine
//! - [`panel`]: per-message container answering the render query

pub mod aggregator;
pub mod controller;
pub mod panel;

pub use aggregator::{extract_fragments, join_fragments, ReasoningView, FRAGMENT_SEPARATOR};
pub use controller::{detect_edge, transition, DisplayState, VisibilityController, VisibilityEvent};
pub use panel::{DisplayDecision, ReasoningPanel};
