//! Application state (pure).
//!
//! Owns the message store, the reasoning panel and the small amount of
//! presentation state the view needs. Everything here is testable without
//! a terminal.

use super::message_store::MessageStore;
use crate::model::{MessageSnapshot, ParseError};
use crate::reasoning::{DisplayDecision, ReasoningPanel};
use crate::source::PolledLine;
use tracing::warn;

/// Where snapshots are coming from, as shown by the LIVE indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Recorded file, nothing more will arrive
    #[default]
    Static,
    /// Piped stdin, more snapshots may arrive
    Streaming,
    /// Piped stdin reached EOF
    Eof,
}

/// Complete UI state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    store: MessageStore,
    panel: ReasoningPanel,
    parse_error_count: usize,
    last_parse_error: Option<ParseError>,
    /// Input mode for the LIVE indicator
    pub input_mode: InputMode,
    /// Blink phase, toggled by the tick timer while streaming
    pub blink_on: bool,
    /// Help overlay visibility
    pub help_visible: bool,
    /// Whether the answer text is drawn below the panel
    pub show_answer: bool,
    /// Vertical scroll offset into the panel body
    pub body_scroll: u16,
    /// Wrapped rows of the open panel body at the last draw
    pub body_rows: u16,
}

impl AppState {
    /// Fresh state for the given input mode, blink and answer on.
    pub fn new(input_mode: InputMode) -> Self {
        Self {
            input_mode,
            blink_on: true,
            show_answer: true,
            ..Self::default()
        }
    }

    /// Snapshot store.
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Reasoning panel bound to the current message.
    pub fn panel(&self) -> &ReasoningPanel {
        &self.panel
    }

    /// Mutable access for user actions.
    pub fn panel_mut(&mut self) -> &mut ReasoningPanel {
        &mut self.panel
    }

    /// Render decision for the panel.
    pub fn display_decision(&self) -> DisplayDecision {
        self.panel.display_decision()
    }

    /// Publish a snapshot to the panel.
    ///
    /// Returns true if the snapshot changed anything.
    pub fn apply_snapshot(&mut self, snapshot: MessageSnapshot) -> bool {
        let previous_id = self.panel.message_id().cloned();
        let changed = self.store.publish(snapshot, &mut self.panel);
        if changed && self.panel.message_id() != previous_id.as_ref() {
            self.body_scroll = 0;
        }
        changed
    }

    /// Apply a batch of parsed lines in order.
    ///
    /// Malformed lines are logged and counted, never fatal. Returns the
    /// number of snapshots that changed the state.
    pub fn ingest(&mut self, lines: Vec<PolledLine>) -> usize {
        let mut applied = 0;
        for line in lines {
            match line {
                Ok(snapshot) => {
                    if self.apply_snapshot(snapshot) {
                        applied += 1;
                    }
                }
                Err(error) => self.record_parse_error(error),
            }
        }
        applied
    }

    /// Count a skipped line.
    pub fn record_parse_error(&mut self, error: ParseError) {
        warn!(line = error.line(), "Skipping malformed snapshot: {}", error);
        self.parse_error_count += 1;
        self.last_parse_error = Some(error);
    }

    /// Number of malformed lines skipped so far.
    pub fn parse_error_count(&self) -> usize {
        self.parse_error_count
    }

    /// Most recent skipped-line error.
    pub fn last_parse_error(&self) -> Option<&ParseError> {
        self.last_parse_error.as_ref()
    }

    /// Largest scroll offset that keeps a body row on screen.
    pub fn max_body_scroll(&self) -> u16 {
        self.body_rows.saturating_sub(1)
    }

    /// Record the wrapped body height and pull the scroll offset back into it.
    pub fn fit_body_scroll(&mut self, body_rows: u16) {
        self.body_rows = body_rows;
        self.body_scroll = self.body_scroll.min(self.max_body_scroll());
    }

    /// Advance the blink phase of streaming affordances.
    pub fn toggle_blink(&mut self) {
        self.blink_on = !self.blink_on;
    }

    /// Note that stdin reached EOF.
    pub fn mark_eof(&mut self) {
        if self.input_mode == InputMode::Streaming {
            self.input_mode = InputMode::Eof;
        }
    }

    /// True while anything on screen animates.
    pub fn needs_blink(&self) -> bool {
        self.input_mode == InputMode::Streaming || self.panel.is_streaming()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
