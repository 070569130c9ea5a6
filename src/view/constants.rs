//! Layout and glyph constants for TUI rendering.
//!
//! Centralized location for layout-related values and panel glyphs.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the panel header in lines.
pub const PANEL_HEADER_HEIGHT: u16 = 1;

/// Share of the content area (0-100) given to an open panel.
///
/// The answer gets the rest, so it stays on screen while reasoning streams.
pub const OPEN_PANEL_HEIGHT_PERCENT: u16 = 60;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Header chevron when the panel is closed.
pub const CHEVRON_CLOSED: &str = "▸ ";

/// Header chevron when the panel is open.
pub const CHEVRON_OPEN: &str = "▾ ";

/// Header label.
pub const PANEL_TITLE: &str = "Thinking";

/// Streaming indicator drawn after the header label.
pub const STREAMING_DOT: &str = " ●";
