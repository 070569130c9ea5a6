//! Panel styling configuration.
//!
//! Provides the hint/foreground/border palette for the reasoning panel and
//! the answer, with a monochrome fallback.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, ignoring the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Monochrome.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PanelStyles =====

/// Styles for the reasoning panel and surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyles {
    /// Header chevron and label
    pub header: Style,
    /// Reasoning body text
    pub body: Style,
    /// Left border of the body
    pub border: Style,
    /// Streaming dot, bright phase
    pub indicator_bright: Style,
    /// Streaming dot, dim phase
    pub indicator_dim: Style,
    /// Answer text
    pub answer: Style,
}

impl PanelStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(color_config: ColorConfig) -> Self {
        if !color_config.colors_enabled() {
            return Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                body: Style::default(),
                border: Style::default(),
                indicator_bright: Style::default().add_modifier(Modifier::BOLD),
                indicator_dim: Style::default(),
                answer: Style::default(),
            };
        }

        Self {
            header: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            body: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::DarkGray),
            indicator_bright: Style::default().fg(Color::Gray),
            indicator_dim: Style::default().fg(Color::DarkGray),
            answer: Style::default().fg(Color::White),
        }
    }
}

impl Default for PanelStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

/// Section header style used in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    fn monochrome_styles_have_no_foreground() {
        let styles = PanelStyles::with_color_config(ColorConfig::disabled());
        assert_eq!(styles.body.fg, None);
        assert_eq!(styles.border.fg, None);
        assert_eq!(styles.answer.fg, None);
    }

    #[test]
    fn colored_indicator_phases_differ() {
        let styles = PanelStyles::with_color_config(ColorConfig::enabled());
        assert_ne!(styles.indicator_bright, styles.indicator_dim);
    }

    #[test]
    fn monochrome_indicator_phases_differ() {
        let styles = PanelStyles::with_color_config(ColorConfig::disabled());
        assert_ne!(styles.indicator_bright, styles.indicator_dim);
    }
}
