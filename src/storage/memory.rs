//! In-process repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{ShiftRepository, upsert};
use crate::error::{EngineError, EngineResult};
use crate::models::{DwellState, Settings, Shift};

#[derive(Debug)]
struct Tables {
    settings: Option<Settings>,
    dwell_state: DwellState,
    shifts: Vec<Shift>,
}

/// Repository that keeps everything in memory.
///
/// Used by tests and by servers started without a data directory.
#[derive(Debug)]
pub struct InMemoryRepository {
    defaults: Settings,
    tables: RwLock<Tables>,
}

impl InMemoryRepository {
    /// Creates an empty repository that reports `defaults` until settings
    /// are saved.
    pub fn new(defaults: Settings) -> Self {
        Self {
            defaults,
            tables: RwLock::new(Tables {
                settings: None,
                dwell_state: DwellState::default(),
                shifts: Vec::new(),
            }),
        }
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| EngineError::storage("in-memory store lock poisoned"))
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| EngineError::storage("in-memory store lock poisoned"))
    }
}

impl ShiftRepository for InMemoryRepository {
    fn get_settings(&self) -> EngineResult<Settings> {
        Ok(self
            .read()?
            .settings
            .clone()
            .unwrap_or_else(|| self.defaults.clone()))
    }

    fn save_settings(&self, settings: &Settings) -> EngineResult<()> {
        self.write()?.settings = Some(settings.clone());
        Ok(())
    }

    fn get_dwell_state(&self) -> EngineResult<DwellState> {
        Ok(self.read()?.dwell_state)
    }

    fn save_dwell_state(&self, state: &DwellState) -> EngineResult<()> {
        self.write()?.dwell_state = *state;
        Ok(())
    }

    fn save_shift(&self, shift: &Shift) -> EngineResult<()> {
        upsert(&mut self.write()?.shifts, shift);
        Ok(())
    }

    fn get_shifts(&self) -> EngineResult<Vec<Shift>> {
        Ok(self.read()?.shifts.clone())
    }

    fn delete_shift(&self, id: &str) -> EngineResult<()> {
        self.write()?.shifts.retain(|shift| shift.id != id);
        Ok(())
    }
}
