//! Error types for thinkview.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Snapshot file/stdin reading failures (file not found, IO)
//!   - [`ParseError`] - JSONL parsing failures (malformed JSON, invalid fields)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Parsing errors are **non-fatal**: malformed JSONL lines are logged and skipped,
//! and the panel keeps showing the last good snapshot. Input and terminal errors
//! are fatal and propagate to the top-level error handler.
//!
//! The reasoning core itself has no error type. It is total over its inputs;
//! malformed upstream data is defaulted by the parser before it gets there.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Recovery Behavior
///
/// - **InputRead/Terminal errors**: Fatal - propagate to main loop for graceful shutdown
/// - **Parse errors**: Non-fatal - logged, the line is skipped
///
/// # Examples
///
/// ```no_run
/// use thinkview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     let _input = read_snapshots()?;
///     Ok(())
/// }
/// # fn read_snapshots() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse a JSONL snapshot line.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer such as resize failures or
    /// broken pipes. Fatal: attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading snapshots from files or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: Display usage help - user must provide file path or pipe stdin
/// - **Io**: Generic I/O failures (permissions, disk errors) - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified snapshot file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use thinkview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided - user must supply a file path or pipe stdin.
    ///
    /// Occurs when invoked without a file argument while stdin is an
    /// interactive terminal.
    ///
    /// ```
    /// use thinkview::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use thinkview::model::error::InputError;
    ///
    /// fn open_snapshots(path: &str) -> Result<File, InputError> {
    ///     Ok(File::open(path)?)
    /// }
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing JSONL snapshot lines.
///
/// Every variant carries the 1-based line number so the log points at the
/// offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line contains syntactically invalid JSON, or JSON that is not a
    /// message object.
    ///
    /// ```
    /// use thinkview::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value at line 1 column 1".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// The 1-based line number where parsing failed.
        line: usize,
        /// The `serde_json` error message.
        message: String,
    },

    /// A field is present but holds a value that cannot be accepted.
    ///
    /// ```
    /// use thinkview::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidField {
    ///     line: 3,
    ///     field: "id",
    ///     reason: "Message ID cannot be empty".to_string(),
    /// };
    /// assert!(err.to_string().contains("'id'"));
    /// ```
    #[error("Invalid field '{field}' at line {line}: {reason}")]
    InvalidField {
        /// The 1-based line number of the offending snapshot.
        line: usize,
        /// Name of the rejected field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ParseError {
    /// The 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidJson { line, .. } | Self::InvalidField { line, .. } => *line,
        }
    }
}
