//! Panel visibility state machine (pure).
//!
//! Decides whether the reasoning panel is open from streaming edges and
//! user toggles. The transition function is a plain
//! `(DisplayState, VisibilityEvent) -> DisplayState`; [`VisibilityController`]
//! owns the state plus the one-slot memory needed for edge detection.
//!
//! # Transition rules
//!
//! Evaluated in this order within one cycle:
//!
//! 1. `ToggleRequested`: mark the user override and flip `open`.
//! 2. `StreamingStarted` (rising edge): open, unless the user has overridden.
//! 3. `StreamingStopped` (falling edge): close and clear the override,
//!    unconditionally.
//!
//! Without an edge nothing changes, so a steady stream never re-opens a panel
//! the user closed.

/// Visibility state owned by one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Whether the panel body is expanded
    pub open: bool,
    /// Whether the user has toggled the panel since the last finalization
    pub user_override_active: bool,
}

/// Input to the visibility transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// User asked to open or close the panel
    ToggleRequested,
    /// `is_streaming` went false → true
    StreamingStarted,
    /// `is_streaming` went true → false
    StreamingStopped,
}

/// Apply one event to a display state.
pub fn transition(state: DisplayState, event: VisibilityEvent) -> DisplayState {
    match event {
        VisibilityEvent::ToggleRequested => DisplayState {
            open: !state.open,
            user_override_active: true,
        },
        VisibilityEvent::StreamingStarted if state.user_override_active => state,
        VisibilityEvent::StreamingStarted => DisplayState {
            open: true,
            ..state
        },
        VisibilityEvent::StreamingStopped => DisplayState {
            open: false,
            user_override_active: false,
        },
    }
}

/// Edge between the previous and current streaming signal, if any.
pub fn detect_edge(was_streaming: bool, is_streaming: bool) -> Option<VisibilityEvent> {
    match (was_streaming, is_streaming) {
        (false, true) => Some(VisibilityEvent::StreamingStarted),
        (true, false) => Some(VisibilityEvent::StreamingStopped),
        _ => None,
    }
}

/// Owning container for one panel's visibility state.
///
/// Each panel instance holds its own controller; nothing is shared.
#[derive(Debug, Clone, Default)]
pub struct VisibilityController {
    state: DisplayState,
    was_streaming_previously: bool,
}

impl VisibilityController {
    /// Fresh controller: closed, no override, not streaming.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display state.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Whether a user toggle is pinning the state.
    pub fn user_override_active(&self) -> bool {
        self.state.user_override_active
    }

    /// Streaming signal seen on the previous evaluation.
    pub fn was_streaming(&self) -> bool {
        self.was_streaming_previously
    }

    /// Feed the current streaming signal.
    ///
    /// Fires at most one streaming transition, and only when the signal
    /// differs from the previous evaluation. Returns the edge that fired.
    pub fn observe(&mut self, is_streaming: bool) -> Option<VisibilityEvent> {
        let edge = detect_edge(self.was_streaming_previously, is_streaming);
        self.was_streaming_previously = is_streaming;
        if let Some(event) = edge {
            self.state = transition(self.state, event);
        }
        edge
    }

    /// Apply a user toggle.
    pub fn request_toggle(&mut self) {
        self.state = transition(self.state, VisibilityEvent::ToggleRequested);
    }

    /// Run one full evaluation cycle.
    ///
    /// A toggle requested in the same cycle is applied before the streaming
    /// edge, so a rising edge cannot undo it while a falling edge still
    /// finalizes.
    pub fn evaluate(&mut self, is_streaming: bool, toggle_requested: bool) -> DisplayState {
        if toggle_requested {
            self.request_toggle();
        }
        self.observe(is_streaming);
        self.state
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
