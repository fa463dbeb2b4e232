//! Application state for the shift tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::notify::PendingShiftInbox;
use crate::storage::ShiftRepository;
use crate::tracker::ShiftTracker;

/// Shared application state.
///
/// Holds the tracker (and through it the repository) plus the inbox of
/// finalized shifts awaiting confirmation.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<ShiftTracker>,
    inbox: Arc<PendingShiftInbox>,
}

impl AppState {
    /// Builds the state, wiring the inbox in as the tracker's notifier.
    pub fn new(repository: Arc<dyn ShiftRepository>) -> Self {
        let inbox = Arc::new(PendingShiftInbox::new());
        let tracker = Arc::new(ShiftTracker::new(repository, inbox.clone()));
        Self { tracker, inbox }
    }

    /// Returns the shift tracker.
    pub fn tracker(&self) -> &ShiftTracker {
        &self.tracker
    }

    /// Returns the repository.
    pub fn repository(&self) -> &dyn ShiftRepository {
        self.tracker.repository().as_ref()
    }

    /// Returns the pending confirmation inbox.
    pub fn inbox(&self) -> &PendingShiftInbox {
        &self.inbox
    }
}
