//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Panel
    /// Open or close the reasoning panel. Default: Enter/Space/t
    ToggleReasoning,

    // Scrolling
    /// Scroll the panel body up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the panel body down by one line. Default: j/↓
    ScrollDown,
    /// Jump to the top of the panel body. Default: g/Home
    ScrollToTop,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
