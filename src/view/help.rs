//! Help overlay listing the active key bindings.
//!
//! Centered modal; `?` or `Esc` dismisses it.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::SECTION_HEADER;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the frame.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

/// Centered rect covering the given percentages of `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn action_label(action: KeyAction) -> &'static str {
    match action {
        KeyAction::ToggleReasoning => "Open/close thinking",
        KeyAction::ScrollUp => "Scroll up",
        KeyAction::ScrollDown => "Scroll down",
        KeyAction::ScrollToTop => "Go to top",
        KeyAction::Quit => "Quit",
        KeyAction::Help => "Toggle this help",
    }
}

/// One line per action, keys joined with `/`, in a fixed action order.
fn build_help_content(bindings: &KeyBindings) -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let described = bindings.describe();
    let mut lines = vec![Line::from(Span::styled("Keys", SECTION_HEADER))];

    for action in [
        KeyAction::ToggleReasoning,
        KeyAction::ScrollDown,
        KeyAction::ScrollUp,
        KeyAction::ScrollToTop,
        KeyAction::Help,
        KeyAction::Quit,
    ] {
        let keys: Vec<&str> = described
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| k.as_str())
            .collect();
        if keys.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", keys.join("/")), key_style),
            Span::styled(action_label(action), desc_style),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("  {:<16}", "Esc"), key_style),
        Span::styled("Close this help", desc_style),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn content_lists_every_action_once() {
        let lines = build_help_content(&KeyBindings::default());
        // Title, six actions, Esc
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn toggle_line_lists_all_toggle_keys() {
        let lines = build_help_content(&KeyBindings::default());
        let toggle = text_of(&lines[1]);
        assert!(toggle.contains("Enter"), "{toggle}");
        assert!(toggle.contains("Space"), "{toggle}");
        assert!(toggle.contains('t'), "{toggle}");
        assert!(toggle.ends_with("Open/close thinking"), "{toggle}");
    }
}
