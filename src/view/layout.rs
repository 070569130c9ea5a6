//! Screen layout: reasoning panel, answer, status bar.

use super::constants::{OPEN_PANEL_HEIGHT_PERCENT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::reasoning_panel::ReasoningPanelWidget;
use super::status_bar::StatusBar;
use super::styles::{ColorConfig, PanelStyles};
use crate::config::KeyBindings;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Reasoning panel rows
    pub panel: Rect,
    /// Answer text below the panel
    pub answer: Rect,
    /// Status bar row
    pub status: Rect,
}

/// Split the frame for a panel that wants `panel_height` rows.
///
/// With an answer on screen an open panel is capped so the answer keeps
/// part of the screen. A one-row gap separates panel and answer.
pub fn calculate_areas(area: Rect, panel_height: u16, has_answer: bool) -> ScreenAreas {
    let [content, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let cap = if has_answer {
        let share = u32::from(content.height) * u32::from(OPEN_PANEL_HEIGHT_PERCENT) / 100;
        u16::try_from(share)
            .unwrap_or(u16::MAX)
            .max(panel_height.min(1))
    } else {
        content.height
    };
    let panel_rows = panel_height.min(cap).min(content.height);
    let gap = u16::from(panel_rows > 0 && has_answer).min(content.height - panel_rows);

    let panel = Rect {
        height: panel_rows,
        ..content
    };
    let answer = Rect {
        y: content.y + panel_rows + gap,
        height: content.height - panel_rows - gap,
        ..content
    };

    ScreenAreas {
        panel,
        answer,
        status,
    }
}

/// Render one frame from state.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    styles: PanelStyles,
    colors: ColorConfig,
    bindings: &KeyBindings,
) {
    let decision = state.display_decision();
    let answer = if state.show_answer {
        state
            .store()
            .current()
            .map(|snapshot| snapshot.answer_text())
            .unwrap_or_default()
    } else {
        String::new()
    };

    let panel = ReasoningPanelWidget::new(&decision, styles)
        .pulse(state.blink_on)
        .scroll(state.body_scroll);
    let areas = calculate_areas(
        frame.area(),
        panel.desired_height(frame.area().width),
        !answer.is_empty(),
    );

    frame.render_widget(panel, areas.panel);

    if !answer.is_empty() {
        frame.render_widget(
            Paragraph::new(answer)
                .style(styles.answer)
                .wrap(Wrap { trim: false }),
            areas.answer,
        );
    }

    frame.render_widget(
        StatusBar::new(state.input_mode, state.blink_on, colors)
            .skipped_lines(state.parse_error_count()),
        areas.status,
    );

    if state.help_visible {
        render_help_overlay(frame, bindings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_takes_last_row() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 10), 3, true);
        assert_eq!(areas.status, Rect::new(0, 9, 40, 1));
    }

    #[test]
    fn invisible_panel_leaves_whole_content_to_answer() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 10), 0, true);
        assert_eq!(areas.panel.height, 0);
        assert_eq!(areas.answer, Rect::new(0, 0, 40, 9));
    }

    #[test]
    fn closed_panel_then_gap_then_answer() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 10), 1, true);
        assert_eq!(areas.panel, Rect::new(0, 0, 40, 1));
        assert_eq!(areas.answer, Rect::new(0, 2, 40, 7));
    }

    #[test]
    fn tall_panel_is_capped_when_answer_present() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 21), 100, true);
        // 20 content rows, 60 percent
        assert_eq!(areas.panel.height, 12);
        assert_eq!(areas.answer.y, 13);
        assert_eq!(areas.answer.height, 7);
    }

    #[test]
    fn very_tall_screen_caps_without_overflow() {
        let areas = calculate_areas(Rect::new(0, 0, 80, 2000), 5000, true);
        // 1999 content rows, 60 percent
        assert_eq!(areas.panel.height, 1199);
        assert_eq!(areas.answer.y, 1200);
        assert_eq!(areas.answer.height, 799);
    }

    #[test]
    fn tall_panel_fills_content_without_answer() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 21), 100, false);
        assert_eq!(areas.panel.height, 20);
        assert_eq!(areas.answer.height, 0);
    }
}
