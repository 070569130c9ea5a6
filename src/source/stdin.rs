//! Stdin-based snapshot source for piped input.
//!
//! Provides StdinSource for reading JSONL from stdin with support for
//! both streaming (live) and complete (EOF reached) modes.

use super::PolledLine;
use crate::model::error::InputError;
use crate::parser;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Message sent from the reader thread to the event loop.
#[derive(Debug)]
enum ReaderMessage {
    Line(String),
    Eof,
    Failed(std::io::Error),
}

/// Stdin source for piped JSONL input.
///
/// Supports both streaming mode (snapshots arriving incrementally, like
/// `producer | thinkview`) and complete mode (EOF reached, like
/// `cat recording.jsonl | thinkview`).
///
/// # Design
///
/// - Detects TTY vs piped input at construction
/// - A background thread does the blocking reads; `poll()` never blocks
/// - Tracks EOF state via `complete` flag
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<ReaderMessage>,
    line_number: usize,
    complete: bool,
}

impl StdinSource {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    /// This prevents the TUI from blocking waiting for user input when the
    /// user forgot to pipe data.
    pub fn new() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(std::io::stdin()))
    }

    /// Create StdinSource from any reader.
    ///
    /// Bypasses the TTY check; used by tests and by callers that already
    /// hold a pipe.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut reader = BufReader::new(reader);
            let mut buffer = String::new();
            loop {
                buffer.clear();
                let message = match reader.read_line(&mut buffer) {
                    Ok(0) => ReaderMessage::Eof,
                    Ok(_) => {
                        // Only complete lines carry a snapshot
                        if !buffer.ends_with('\n') {
                            ReaderMessage::Eof
                        } else {
                            let line = buffer.trim_end_matches(['\n', '\r']).to_string();
                            ReaderMessage::Line(line)
                        }
                    }
                    Err(e) => ReaderMessage::Failed(e),
                };
                let done = !matches!(message, ReaderMessage::Line(_));
                if tx.send(message).is_err() || done {
                    break;
                }
            }
        });

        Self {
            rx,
            line_number: 0,
            complete: false,
        }
    }

    /// Poll for raw lines received since the last call.
    ///
    /// Non-blocking: returns immediately with whatever complete lines are
    /// available. Sets the `complete` flag once EOF is reached.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the reader thread hit an I/O error.
    pub fn poll_lines(&mut self) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        while !self.complete {
            match self.rx.try_recv() {
                Ok(ReaderMessage::Line(line)) => lines.push(line),
                Ok(ReaderMessage::Eof) | Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                }
                Ok(ReaderMessage::Failed(e)) => {
                    self.complete = true;
                    return Err(InputError::Io(e));
                }
                Err(TryRecvError::Empty) => break,
            }
        }
        Ok(lines)
    }

    /// Poll and parse available lines into snapshots.
    ///
    /// Blank lines are skipped but still count toward line numbers.
    pub fn poll_and_parse(&mut self) -> Result<Vec<PolledLine>, InputError> {
        let lines = self.poll_lines()?;
        let mut parsed = Vec::with_capacity(lines.len());
        for line in lines {
            self.line_number += 1;
            if let Some(result) = parser::parse_line(&line, self.line_number) {
                parsed.push(result);
            }
        }
        Ok(parsed)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
