//! Status bar: LIVE indicator, skipped-line count and key hint.
//!
//! The LIVE indicator is gray for a recorded file and after stdin EOF, and
//! blinks green while stdin may still deliver snapshots. Blink state is
//! passed in; the tick timer owns it.

use super::styles::ColorConfig;
use crate::state::InputMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

const LIVE_LABEL: &str = "[LIVE] ";
const KEY_HINT: &str = "Enter: toggle thinking | j/k: scroll | ?: help | q: quit";

/// Span for the LIVE indicator.
///
/// Hidden during the off phase of the streaming blink.
pub fn live_indicator(mode: InputMode, blink_on: bool, colors: ColorConfig) -> Span<'static> {
    let color = match mode {
        InputMode::Static | InputMode::Eof => Color::Gray,
        InputMode::Streaming if blink_on => Color::Green,
        InputMode::Streaming => return Span::raw(" ".repeat(LIVE_LABEL.chars().count())),
    };

    if colors.colors_enabled() {
        Span::styled(LIVE_LABEL, Style::default().fg(color))
    } else {
        Span::raw(LIVE_LABEL)
    }
}

/// One-line status bar widget.
#[derive(Debug, Clone, Copy)]
pub struct StatusBar {
    mode: InputMode,
    blink_on: bool,
    skipped_lines: usize,
    colors: ColorConfig,
}

impl StatusBar {
    /// Status bar for the given input mode and blink phase.
    pub fn new(mode: InputMode, blink_on: bool, colors: ColorConfig) -> Self {
        Self {
            mode,
            blink_on,
            skipped_lines: 0,
            colors,
        }
    }

    /// Number of malformed lines skipped so far (builder pattern).
    pub fn skipped_lines(mut self, count: usize) -> Self {
        self.skipped_lines = count;
        self
    }

    /// Styled status line.
    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![live_indicator(self.mode, self.blink_on, self.colors)];

        if self.skipped_lines > 0 {
            let text = format!("{} skipped | ", self.skipped_lines);
            if self.colors.colors_enabled() {
                spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
            } else {
                spans.push(Span::raw(text));
            }
        }

        let hint_style = if self.colors.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        spans.push(Span::styled(KEY_HINT, hint_style));

        Line::from(spans)
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}
