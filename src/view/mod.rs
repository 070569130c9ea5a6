//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod layout;
pub mod reasoning_panel;
pub mod status_bar;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use reasoning_panel::ReasoningPanelWidget;
pub use status_bar::StatusBar;
pub use styles::{ColorConfig, PanelStyles};

use self::constants::PANEL_HEADER_HEIGHT;
use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::InputSource;
use crate::state::{handle_action, AppState, InputMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    styles: PanelStyles,
    colors: ColorConfig,
    tick: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(input_source: InputSource, args: &CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, input_source, args)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Keys and resizes redraw
    /// immediately; input is polled and the blink advanced once per tick
    /// however many events arrive in between.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_tick = Instant::now();

        loop {
            if event::poll(time_until_tick(last_tick.elapsed(), self.tick))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if tick_due(last_tick.elapsed(), self.tick) {
                last_tick = Instant::now();
                if self.on_tick()? {
                    self.draw()?;
                }
            }
        }
    }
}

/// How long to wait for input before the next tick is due.
fn time_until_tick(elapsed: Duration, tick: Duration) -> Duration {
    tick.saturating_sub(elapsed)
}

fn tick_due(elapsed: Duration, tick: Duration) -> bool {
    elapsed >= tick
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an already initialized terminal and load the first
    /// batch of input.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut input_source: InputSource,
        args: &CliArgs,
    ) -> Result<Self, TuiError> {
        let input_mode = if matches!(input_source, InputSource::Stdin(_)) {
            InputMode::Streaming
        } else {
            InputMode::Static
        };

        let mut app_state = AppState::new(input_mode);
        app_state.show_answer = args.show_answer;
        let initial = input_source.poll()?;
        let applied = app_state.ingest(initial);
        info!(applied, ?input_mode, "Initial input loaded");

        let colors = ColorConfig::from_env_and_args(args.no_color);

        Ok(Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            styles: PanelStyles::with_color_config(colors),
            colors,
            tick: Duration::from_millis(args.tick_ms.max(1)),
        })
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle one timer tick: poll input, advance the blink phase.
    ///
    /// Returns true if the screen needs a redraw.
    pub fn on_tick(&mut self) -> Result<bool, TuiError> {
        let lines = self.input_source.poll()?;
        let mut dirty = false;

        if !lines.is_empty() {
            debug!(count = lines.len(), "Processing polled lines");
            let errors_before = self.app_state.parse_error_count();
            let applied = self.app_state.ingest(lines);
            dirty = applied > 0 || self.app_state.parse_error_count() != errors_before;
        }

        if self.app_state.input_mode == InputMode::Streaming && !self.input_source.is_live() {
            info!("Input reached EOF");
            self.app_state.mark_eof();
            dirty = true;
        }

        if self.app_state.needs_blink() {
            self.app_state.toggle_blink();
            dirty = true;
        } else if !self.app_state.blink_on {
            // Settle on the visible phase once nothing animates
            self.app_state.blink_on = true;
            dirty = true;
        }

        Ok(dirty)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            return true;
        }

        debug!(?action, "Key action");
        let state = std::mem::take(&mut self.app_state);
        self.app_state = handle_action(state, action);
        false
    }

    /// Render the current frame
    ///
    /// Measures the wrapped panel body first so scrolling stops at its end.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let width = self.terminal.size()?.width;
        let decision = self.app_state.display_decision();
        let body_rows = ReasoningPanelWidget::new(&decision, self.styles)
            .desired_height(width)
            .saturating_sub(PANEL_HEADER_HEIGHT);
        self.app_state.fit_body_scroll(body_rows);

        let state = &self.app_state;
        let styles = self.styles;
        let colors = self.colors;
        let bindings = &self.key_bindings;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles, colors, bindings);
        })?;
        Ok(())
    }
}

/// CLI-derived settings that configure the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Tick interval in milliseconds (input polling, blink, replay pace)
    pub tick_ms: u64,
    /// Draw the answer text below the panel
    pub show_answer: bool,
    /// `--no-color` flag
    pub no_color: bool,
}

impl CliArgs {
    /// Bundle resolved settings.
    pub fn new(tick_ms: u64, show_answer: bool, no_color: bool) -> Self {
        Self {
            tick_ms,
            show_answer,
            no_color,
        }
    }
}

/// Initialize and run the TUI application with input source and args
///
/// Handles terminal setup, runs the event loop and restores the terminal
/// on exit, including after errors.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    let result = TuiApp::new(input_source, &args).and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
