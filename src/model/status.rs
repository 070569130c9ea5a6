//! Streaming status signals for messages and content parts.

// Upstream status string for an actively streaming message or part.
const STATUS_RUNNING: &str = "running";

// ===== MessageStreamStatus =====

/// Overall status of the current message.
///
/// Upstream stores report richer states (complete, incomplete,
/// requires-action, error). Only `running` matters here; everything else
/// collapses to `NotRunning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStreamStatus {
    /// The assistant is still producing output for this message
    Running,
    /// Finalized, errored, cancelled, or unknown
    #[default]
    NotRunning,
}

impl MessageStreamStatus {
    /// Map an upstream status string. Missing status means not running.
    pub fn from_upstream(raw: Option<&str>) -> Self {
        match raw {
            Some(STATUS_RUNNING) => Self::Running,
            _ => Self::NotRunning,
        }
    }

    /// True for `Running`.
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

// ===== PartStatus =====

/// Per-part status as reported upstream.
///
/// Kept as reported so the original string survives for logging, while
/// [`PartStatus::is_running`] answers the only question the core asks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PartStatus {
    /// Part is still being written
    Running,
    /// Part is finished (complete, incomplete, or any other reported state)
    Finished(String),
    /// Upstream did not report a status
    #[default]
    Unknown,
}

impl PartStatus {
    /// Map an upstream part status string.
    pub fn from_upstream(raw: Option<&str>) -> Self {
        match raw {
            Some(STATUS_RUNNING) => Self::Running,
            Some(other) => Self::Finished(other.to_string()),
            None => Self::Unknown,
        }
    }

    /// True only for `Running`; unknown counts as finished.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_status_running_maps_to_running() {
        assert_eq!(
            MessageStreamStatus::from_upstream(Some("running")),
            MessageStreamStatus::Running
        );
    }

    #[test]
    fn message_status_terminal_states_collapse_to_not_running() {
        for raw in ["complete", "incomplete", "requires-action", "error", ""] {
            assert_eq!(
                MessageStreamStatus::from_upstream(Some(raw)),
                MessageStreamStatus::NotRunning,
                "{raw:?} should collapse to NotRunning"
            );
        }
    }

    #[test]
    fn message_status_missing_is_not_running() {
        assert!(!MessageStreamStatus::from_upstream(None).is_running());
        assert_eq!(MessageStreamStatus::default(), MessageStreamStatus::NotRunning);
    }

    #[test]
    fn part_status_missing_is_not_running() {
        let status = PartStatus::from_upstream(None);
        assert_eq!(status, PartStatus::Unknown);
        assert!(!status.is_running());
    }

    #[test]
    fn part_status_keeps_finished_label() {
        let status = PartStatus::from_upstream(Some("complete"));
        assert_eq!(status, PartStatus::Finished("complete".to_string()));
        assert!(!status.is_running());
    }

    #[test]
    fn part_status_running_is_running() {
        assert!(PartStatus::from_upstream(Some("running")).is_running());
    }
}
