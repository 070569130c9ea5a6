//! Reasoning panel widget.
//!
//! Draws a [`DisplayDecision`]: nothing when invisible, the header alone
//! when closed, header plus bordered body when open. The streaming dot
//! depends only on `streaming_indicator`; the pulse phase changes its
//! style, never its presence.

use super::constants::{
    CHEVRON_CLOSED, CHEVRON_OPEN, PANEL_HEADER_HEIGHT, PANEL_TITLE, STREAMING_DOT,
};
use super::styles::PanelStyles;
use crate::reasoning::DisplayDecision;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

/// Stateless widget over one render decision.
#[derive(Debug, Clone)]
pub struct ReasoningPanelWidget<'a> {
    decision: &'a DisplayDecision,
    pulse_on: bool,
    scroll: u16,
    styles: PanelStyles,
}

impl<'a> ReasoningPanelWidget<'a> {
    /// Widget for `decision`, bright pulse phase, no scroll.
    pub fn new(decision: &'a DisplayDecision, styles: PanelStyles) -> Self {
        Self {
            decision,
            pulse_on: true,
            scroll: 0,
            styles,
        }
    }

    /// Pulse phase of the streaming dot (builder pattern).
    pub fn pulse(mut self, pulse_on: bool) -> Self {
        self.pulse_on = pulse_on;
        self
    }

    /// Vertical scroll offset into the body (builder pattern).
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Header line: chevron, label, and the streaming dot while streaming.
    pub fn header_line(&self) -> Line<'static> {
        let chevron = if self.decision.open {
            CHEVRON_OPEN
        } else {
            CHEVRON_CLOSED
        };

        let mut spans = vec![
            Span::styled(chevron, self.styles.header),
            Span::styled(PANEL_TITLE, self.styles.header),
        ];

        if self.decision.streaming_indicator {
            let style = if self.pulse_on {
                self.styles.indicator_bright
            } else {
                self.styles.indicator_dim
            };
            spans.push(Span::styled(STREAMING_DOT, style));
        }

        Line::from(spans)
    }

    /// Rows the panel wants: none, header only, or header plus body.
    pub fn desired_height(&self, width: u16) -> u16 {
        if !self.decision.visible {
            return 0;
        }
        if !self.decision.open {
            return PANEL_HEADER_HEIGHT;
        }
        // Border and padding take two columns
        let body_width = usize::from(width.saturating_sub(2)).max(1);
        let body_rows: usize = self
            .decision
            .text
            .split('\n')
            .map(|line| line.chars().count().div_ceil(body_width).max(1))
            .sum();
        PANEL_HEADER_HEIGHT.saturating_add(u16::try_from(body_rows).unwrap_or(u16::MAX))
    }
}

impl Widget for ReasoningPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.decision.visible || area.height == 0 || area.width == 0 {
            return;
        }

        let header = self.header_line();
        buf.set_line(area.x, area.y, &header, area.width);

        if !self.decision.open || area.height <= PANEL_HEADER_HEIGHT {
            return;
        }

        let body_area = Rect {
            y: area.y + PANEL_HEADER_HEIGHT,
            height: area.height - PANEL_HEADER_HEIGHT,
            ..area
        };

        Paragraph::new(self.decision.text.as_str())
            .style(self.styles.body)
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(self.styles.border)
                    .padding(Padding::left(1)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(body_area, buf);
    }
}

#[cfg(test)]
#[path = "reasoning_panel_tests.rs"]
mod tests;
