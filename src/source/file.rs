//! File-based snapshot source.
//!
//! Reads a recorded JSONL stream at construction. Snapshots are handed out
//! either all at once or, in replay mode, one per poll so the recording
//! plays back at the event loop's tick rate.

use super::PolledLine;
use crate::model::error::InputError;
use crate::parser;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Read-once snapshot file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    pending: VecDeque<PolledLine>,
    replay: bool,
}

impl FileSource {
    /// Load and parse the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let pending = contents
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parser::parse_line(line, idx + 1))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            pending,
            replay: false,
        })
    }

    /// Hand out one snapshot per poll instead of all at once (builder pattern).
    pub fn with_replay(mut self, replay: bool) -> Self {
        self.replay = replay;
        self
    }

    /// Path the snapshots were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether snapshots are handed out one per poll.
    pub fn is_replay(&self) -> bool {
        self.replay
    }

    /// Take pending snapshots.
    ///
    /// - Replay off: everything on the first call, empty afterwards
    /// - Replay on: at most one line per call
    pub fn drain_entries(&mut self) -> Vec<PolledLine> {
        if self.replay {
            self.pending.pop_front().into_iter().collect()
        } else {
            self.pending.drain(..).collect()
        }
    }

    /// True once every line has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}
