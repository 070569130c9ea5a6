//! Rendered-panel snapshots through ratatui's TestBackend.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use thinkview::model::{ContentPart, MessageSnapshot, MessageStreamStatus};
use thinkview::reasoning::ReasoningPanel;
use thinkview::view::{ColorConfig, PanelStyles, ReasoningPanelWidget};

/// Buffer contents with trailing whitespace trimmed and trailing empty rows
/// dropped.
fn buffer_to_string(buf: &Buffer) -> String {
    let mut rows: Vec<String> = (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
            row.trim_end().to_string()
        })
        .collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}

fn render_panel(panel: &ReasoningPanel, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    let decision = panel.display_decision();
    let styles = PanelStyles::with_color_config(ColorConfig::disabled());
    terminal
        .draw(|frame| {
            frame.render_widget(ReasoningPanelWidget::new(&decision, styles), frame.area());
        })
        .expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn streaming_panel_snapshot() {
    let mut panel = ReasoningPanel::new();
    panel.observe(&MessageSnapshot::new(
        MessageStreamStatus::Running,
        vec![
            ContentPart::reasoning("Read the question.", false),
            ContentPart::reasoning("Check the edge cases.", true),
        ],
    ));

    insta::assert_snapshot!(render_panel(&panel, 32, 6), @r"
    ▾ Thinking ●
    │ Read the question.
    │
    │ Check the edge cases.
    │
    │
    ");
}

#[test]
fn finalized_panel_snapshot() {
    let mut panel = ReasoningPanel::new();
    panel.observe(&MessageSnapshot::new(
        MessageStreamStatus::NotRunning,
        vec![
            ContentPart::reasoning("Done thinking.", false),
            ContentPart::text("The answer."),
        ],
    ));

    insta::assert_snapshot!(render_panel(&panel, 32, 4), @"▸ Thinking");
}

#[test]
fn panel_without_reasoning_renders_nothing() {
    let mut panel = ReasoningPanel::new();
    panel.observe(&MessageSnapshot::new(
        MessageStreamStatus::Running,
        vec![ContentPart::text("Straight to the answer.")],
    ));

    assert_eq!(render_panel(&panel, 32, 4), "");
}
