//! Current-message store with change notification.
//!
//! Holds the latest snapshot of the message on screen and publishes it to an
//! observer whenever content or status changes. This is the explicit
//! subscription between upstream data and the reasoning panel.

use crate::model::MessageSnapshot;
use crate::reasoning::ReasoningPanel;
use tracing::debug;

/// Receives snapshots when the current message changes.
pub trait SnapshotObserver {
    /// Called with the new snapshot after every change.
    fn on_snapshot(&mut self, snapshot: &MessageSnapshot);
}

impl SnapshotObserver for ReasoningPanel {
    fn on_snapshot(&mut self, snapshot: &MessageSnapshot) {
        self.observe(snapshot);
    }
}

/// Point-in-time holder of the current message snapshot.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    current: Option<MessageSnapshot>,
    revision: u64,
}

impl MessageStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, if any has arrived.
    pub fn current(&self) -> Option<&MessageSnapshot> {
        self.current.as_ref()
    }

    /// Number of changes published so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Store `snapshot` and notify `observer` if it differs from the current one.
    ///
    /// Returns true if the observer was notified.
    pub fn publish<O>(&mut self, snapshot: MessageSnapshot, observer: &mut O) -> bool
    where
        O: SnapshotObserver + ?Sized,
    {
        if self.current.as_ref() == Some(&snapshot) {
            return false;
        }

        self.revision += 1;
        debug!(
            revision = self.revision,
            status = ?snapshot.status(),
            parts = snapshot.content().len(),
            "Publishing message snapshot"
        );
        observer.on_snapshot(&snapshot);
        self.current = Some(snapshot);
        true
    }
}
