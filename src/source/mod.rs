//! Snapshot input sources.
//!
//! This module provides input sources for JSONL snapshot data:
//! - File loading for recorded streams (optionally replayed)
//! - Stdin for piped input (live streaming)
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use crate::model::{MessageSnapshot, ParseError};
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// One parsed line: a snapshot, or the error that made it unusable.
pub type PolledLine = Result<MessageSnapshot, ParseError>;

/// Unified input source for JSONL snapshot data.
///
/// Abstracts over file loading and stdin sources with a common interface.
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - read-once loading
    File(FileSource),
    /// Stdin source - reads from piped stdin (live streaming)
    Stdin(StdinSource),
}

impl InputSource {
    /// Poll for new snapshots from the input source.
    ///
    /// Returns parsed lines, not raw strings (parse at boundary).
    /// Non-blocking - returns immediately with available lines.
    ///
    /// # Behavior:
    /// - File: all lines on first call (one per call when replaying)
    /// - Stdin: incremental as data arrives
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Vec<PolledLine>, InputError> {
        match self {
            InputSource::File(f) => Ok(f.drain_entries()),
            InputSource::Stdin(s) => s.poll_and_parse(),
        }
    }

    /// Check if the source is still live (can receive more data).
    ///
    /// # Behavior:
    /// - File: always false (static, read-once)
    /// - Stdin: true until EOF is reached
    pub fn is_live(&self) -> bool {
        match self {
            InputSource::File(_) => false,
            InputSource::Stdin(s) => !s.is_complete(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource (loads on construction)
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>, replay: bool) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?.with_replay(replay))),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::IsTerminal;
    use std::thread;
    use std::time::Duration;

    const ONE_SNAPSHOT: &str =
        r#"{"id":"m1","status":"complete","content":[{"type":"reasoning","text":"done"}]}"#;

    // ========================================================================
    // InputSource::poll() tests - File variant
    // ========================================================================

    #[test]
    fn poll_returns_all_snapshots_on_first_call_for_file() {
        use std::fs;

        let test_file = std::env::temp_dir().join("thinkview_poll_test_file_first_call.jsonl");
        fs::write(&test_file, format!("{ONE_SNAPSHOT}\n{ONE_SNAPSHOT}\n")).unwrap();

        let mut source = detect_input_source(Some(test_file.clone()), false).unwrap();
        let _ = fs::remove_file(&test_file);

        let result = source.poll().unwrap();
        assert_eq!(result.len(), 2, "Should return all 2 snapshots on first poll");
        assert!(source.poll().unwrap().is_empty(), "Second poll should be empty");
    }

    #[test]
    fn poll_replays_file_one_snapshot_at_a_time() {
        use std::fs;

        let test_file = std::env::temp_dir().join("thinkview_poll_test_file_replay.jsonl");
        fs::write(&test_file, format!("{ONE_SNAPSHOT}\n{ONE_SNAPSHOT}\n")).unwrap();

        let mut source = detect_input_source(Some(test_file.clone()), true).unwrap();
        let _ = fs::remove_file(&test_file);

        assert_eq!(source.poll().unwrap().len(), 1);
        assert_eq!(source.poll().unwrap().len(), 1);
        assert!(source.poll().unwrap().is_empty());
    }

    // ========================================================================
    // InputSource::poll() tests - Stdin variant
    // ========================================================================

    #[test]
    fn poll_returns_parsed_snapshots_for_stdin() {
        let data = format!("{ONE_SNAPSHOT}\n").into_bytes();
        let mut source = InputSource::Stdin(StdinSource::from_reader(std::io::Cursor::new(data)));

        // Give background thread time to read
        thread::sleep(Duration::from_millis(50));

        let result = source.poll().unwrap();
        assert_eq!(result.len(), 1, "Should parse 1 snapshot from stdin");
        let snapshot = result[0].as_ref().unwrap();
        assert_eq!(snapshot.id().map(|id| id.as_str()), Some("m1"));
    }

    // ========================================================================
    // InputSource::is_live() tests
    // ========================================================================

    #[test]
    fn is_live_returns_false_for_file_sources() {
        use std::fs;

        let test_file = std::env::temp_dir().join("thinkview_is_live_test_file.jsonl");
        fs::write(&test_file, format!("{ONE_SNAPSHOT}\n")).unwrap();

        let source = detect_input_source(Some(test_file.clone()), false).unwrap();
        let _ = fs::remove_file(&test_file);

        assert!(
            !source.is_live(),
            "File sources are never live (static, read-once)"
        );
    }

    #[test]
    fn is_live_returns_true_for_stdin_before_eof() {
        let data = b"";
        let source = InputSource::Stdin(StdinSource::from_reader(&data[..]));
        assert!(source.is_live(), "Stdin source should be live before EOF is seen");
    }

    #[test]
    fn is_live_returns_false_for_stdin_after_eof() {
        let data = format!("{ONE_SNAPSHOT}\n").into_bytes();
        let mut source = InputSource::Stdin(StdinSource::from_reader(std::io::Cursor::new(data)));

        for _ in 0..100 {
            source.poll().unwrap();
            if !source.is_live() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!source.is_live(), "Stdin source should not be live after EOF");
    }

    // ========================================================================
    // detect_input_source() tests
    // ========================================================================

    #[test]
    fn detect_returns_file_not_found_for_missing_file() {
        let missing_file = std::env::temp_dir().join("thinkview_nonexistent_detect_12345.jsonl");

        let result = detect_input_source(Some(missing_file.clone()), false);

        assert!(
            matches!(result, Err(InputError::FileNotFound { .. })),
            "Should return FileNotFound for missing file, got: {:?}",
            result
        );
        if let Err(InputError::FileNotFound { path }) = result {
            assert_eq!(path, missing_file);
        }
    }

    #[test]
    fn detect_returns_no_input_when_no_file_and_stdin_is_tty() {
        // Only meaningful when the test runner's stdin is a terminal
        if std::io::stdin().is_terminal() {
            let result = detect_input_source(None, false);
            assert!(
                matches!(result, Err(InputError::NoInput)),
                "Expected NoInput error when no file and stdin is TTY, got: {:?}",
                result
            );
        }
    }
}
