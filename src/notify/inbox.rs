//! In-process holding area for finalized shifts awaiting confirmation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use super::{Notifier, ShiftEndedNotification};
use crate::error::{EngineError, EngineResult};
use crate::models::Shift;
use crate::storage::ShiftRepository;

/// Keeps shift-ended notifications until the user acts on them.
#[derive(Debug, Default)]
pub struct PendingShiftInbox {
    pending: Mutex<Vec<ShiftEndedNotification>>,
}

impl PendingShiftInbox {
    /// Creates an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<ShiftEndedNotification>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Notifications awaiting a decision, oldest first.
    pub fn list(&self) -> Vec<ShiftEndedNotification> {
        self.entries().clone()
    }

    fn position(entries: &[ShiftEndedNotification], shift_id: &str) -> EngineResult<usize> {
        entries
            .iter()
            .position(|entry| entry.shift.id == shift_id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })
    }

    /// Removes and returns the pending shift with the given id.
    pub fn take(&self, shift_id: &str) -> EngineResult<Shift> {
        let mut entries = self.entries();
        let index = Self::position(&entries, shift_id)?;
        Ok(entries.remove(index).shift)
    }

    /// Saves a pending shift, optionally attaching notes.
    ///
    /// The shift leaves the inbox only once the repository write succeeds;
    /// on failure the pending entry is left exactly as it was.
    pub fn confirm(
        &self,
        shift_id: &str,
        notes: Option<String>,
        repository: &dyn ShiftRepository,
    ) -> EngineResult<Shift> {
        let mut entries = self.entries();
        let index = Self::position(&entries, shift_id)?;

        let mut shift = entries[index].shift.clone();
        if let Some(notes) = notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
        {
            shift.notes = Some(notes.to_string());
        }

        repository.save_shift(&shift)?;
        entries.remove(index);
        drop(entries);

        info!(shift_id = %shift.id, pay = %shift.pay, "Pending shift confirmed");
        Ok(shift)
    }

    /// Drops a pending shift without saving it.
    pub fn discard(&self, shift_id: &str) -> EngineResult<()> {
        let shift = self.take(shift_id)?;
        info!(shift_id = %shift.id, "Pending shift discarded");
        Ok(())
    }
}

impl Notifier for PendingShiftInbox {
    fn notify_shift_ended(&self, shift: &Shift) -> EngineResult<()> {
        let notification = ShiftEndedNotification::for_shift(shift);
        info!(
            shift_id = %shift.id,
            body = %notification.body,
            "Shift ended, awaiting confirmation"
        );
        self.entries().push(notification);
        Ok(())
    }
}
