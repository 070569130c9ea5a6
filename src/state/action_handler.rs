//! Keyboard action handler.
//!
//! Pure function that transforms AppState in response to a user action.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The action to handle
///
/// Returns a new AppState with the action applied. `Quit` is left to the
/// event loop and passes through unchanged.
pub fn handle_action(mut state: AppState, action: KeyAction) -> AppState {
    // Help overlay swallows everything except closing it
    if state.help_visible {
        if action == KeyAction::Help {
            state.help_visible = false;
        }
        return state;
    }

    match action {
        KeyAction::ToggleReasoning => {
            state.panel_mut().request_toggle();
        }
        KeyAction::ScrollUp => {
            state.body_scroll = state.body_scroll.saturating_sub(1);
        }
        KeyAction::ScrollDown => {
            // Only meaningful while the body is on screen
            if state.display_decision().open {
                state.body_scroll = state
                    .body_scroll
                    .saturating_add(1)
                    .min(state.max_body_scroll());
            }
        }
        KeyAction::ScrollToTop => {
            state.body_scroll = 0;
        }
        KeyAction::Help => {
            state.help_visible = true;
        }
        KeyAction::Quit => {}
    }

    state
}
