//! Persistence contract for settings, dwell state and shifts.
//!
//! The tracker only ever talks to a [`ShiftRepository`]; the two shipped
//! implementations keep everything in memory or in JSON files on disk.
//!
//! # Example
//!
//! ```
//! use shift_tracker::storage::{InMemoryRepository, ShiftRepository};
//! use shift_tracker::models::Settings;
//!
//! let repository = InMemoryRepository::new(Settings::default());
//! assert!(repository.get_shifts().unwrap().is_empty());
//! ```

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

use crate::error::{EngineError, EngineResult};
use crate::models::{DwellState, Settings, Shift};

/// Durable store used by the tracker and the HTTP layer.
///
/// Implementations return first-run defaults when nothing has been stored
/// yet and report any read or write failure as `EngineError::Storage`.
pub trait ShiftRepository: Send + Sync {
    /// Current settings, or the first-run defaults.
    fn get_settings(&self) -> EngineResult<Settings>;

    /// Replaces the stored settings.
    fn save_settings(&self, settings: &Settings) -> EngineResult<()>;

    /// Current dwell state, or idle.
    fn get_dwell_state(&self) -> EngineResult<DwellState>;

    /// Replaces the stored dwell state.
    fn save_dwell_state(&self, state: &DwellState) -> EngineResult<()>;

    /// Resets the dwell state to idle.
    fn clear_dwell_state(&self) -> EngineResult<()> {
        self.save_dwell_state(&DwellState::default())
    }

    /// Inserts the shift, or replaces the stored shift with the same id.
    fn save_shift(&self, shift: &Shift) -> EngineResult<()>;

    /// All stored shifts in insertion order.
    fn get_shifts(&self) -> EngineResult<Vec<Shift>>;

    /// Removes the shift with the given id. Absent ids are not an error.
    fn delete_shift(&self, id: &str) -> EngineResult<()>;

    /// Looks up a single shift.
    fn get_shift(&self, id: &str) -> EngineResult<Shift> {
        self.get_shifts()?
            .into_iter()
            .find(|shift| shift.id == id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: id.to_string(),
            })
    }
}

/// Upsert shared by both implementations: replace in place, else append.
fn upsert(shifts: &mut Vec<Shift>, shift: &Shift) {
    match shifts.iter_mut().find(|existing| existing.id == shift.id) {
        Some(existing) => *existing = shift.clone(),
        None => shifts.push(shift.clone()),
    }
}
