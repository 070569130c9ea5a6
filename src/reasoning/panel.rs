//! Per-message reasoning panel.
//!
//! Ties the aggregator and the visibility controller to the message currently
//! on screen and answers the rendering layer's single query.

use super::aggregator::ReasoningView;
use super::controller::{DisplayState, VisibilityController, VisibilityEvent};
use crate::model::{MessageId, MessageSnapshot, MessageStreamStatus};
use tracing::debug;

/// What the rendering layer should draw for the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayDecision {
    /// False iff the message has no reasoning fragments
    pub visible: bool,
    /// Panel body expanded
    pub open: bool,
    /// Streaming affordance next to the header
    pub streaming_indicator: bool,
    /// Aggregated reasoning text
    pub text: String,
}

/// Reasoning panel bound to one message.
///
/// A snapshot carrying a different message id discards the previous state;
/// open/closed never carries over between messages.
#[derive(Debug, Clone, Default)]
pub struct ReasoningPanel {
    message_id: Option<MessageId>,
    status: MessageStreamStatus,
    view: ReasoningView,
    controller: VisibilityController,
}

impl ReasoningPanel {
    /// Panel with no message, closed and invisible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the panel from a new snapshot of the message.
    ///
    /// Returns the streaming edge that fired, if any.
    pub fn observe(&mut self, snapshot: &MessageSnapshot) -> Option<VisibilityEvent> {
        if let Some(id) = snapshot.id() {
            if self.message_id.as_ref() != Some(id) {
                if self.message_id.is_some() {
                    debug!(message_id = %id, "New message, resetting reasoning panel");
                }
                *self = Self {
                    message_id: Some(id.clone()),
                    ..Self::default()
                };
            }
        }

        self.status = snapshot.status();
        self.view = ReasoningView::from_parts(snapshot.content());

        let edge = self.controller.observe(self.is_streaming());
        if let Some(event) = edge {
            debug!(
                ?event,
                state = ?self.controller.state(),
                fragments = self.view.fragments().len(),
                "Reasoning panel streaming edge"
            );
        }
        edge
    }

    /// User asked to open or close the panel.
    ///
    /// Ignored while the panel is not visible: there is no header to click.
    pub fn request_toggle(&mut self) {
        if !self.is_visible() {
            return;
        }
        self.controller.request_toggle();
        debug!(state = ?self.controller.state(), "Reasoning panel toggled by user");
    }

    /// True iff the message has at least one reasoning fragment.
    pub fn is_visible(&self) -> bool {
        !self.view.is_empty()
    }

    /// Derived streaming signal for the current snapshot.
    pub fn is_streaming(&self) -> bool {
        self.view.is_streaming(self.status)
    }

    /// Message this panel is bound to.
    pub fn message_id(&self) -> Option<&MessageId> {
        self.message_id.as_ref()
    }

    /// Aggregated reasoning of the current snapshot.
    pub fn view(&self) -> &ReasoningView {
        &self.view
    }

    /// Raw controller state, regardless of visibility.
    pub fn display_state(&self) -> DisplayState {
        self.controller.state()
    }

    /// Current render decision.
    ///
    /// When no fragment exists the controller state is not consulted and an
    /// invisible, closed, empty decision is returned.
    pub fn display_decision(&self) -> DisplayDecision {
        if !self.is_visible() {
            return DisplayDecision::default();
        }

        DisplayDecision {
            visible: true,
            open: self.controller.is_open(),
            streaming_indicator: self.is_streaming(),
            text: self.view.text().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
