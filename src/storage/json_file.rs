//! Repository backed by JSON files in a data directory.
//!
//! Layout:
//! ```text
//! <data_dir>/
//! ├── settings.json
//! ├── dwell_state.json
//! └── shifts.json
//! ```
//! A missing file means nothing has been stored yet. Writes go to a
//! temporary sibling first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ShiftRepository, upsert};
use crate::error::{EngineError, EngineResult};
use crate::models::{DwellState, Settings, Shift};

const SETTINGS_FILE: &str = "settings.json";
const DWELL_STATE_FILE: &str = "dwell_state.json";
const SHIFTS_FILE: &str = "shifts.json";

/// Repository persisting to JSON files.
#[derive(Debug)]
pub struct JsonFileRepository {
    data_dir: PathBuf,
    defaults: Settings,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    /// Opens (creating if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(data_dir: P, defaults: Settings) -> EngineResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| {
            EngineError::storage(format!("cannot create {}: {}", data_dir.display(), e))
        })?;

        Ok(Self {
            data_dir,
            defaults,
            write_lock: Mutex::new(()),
        })
    }

    /// The directory the files live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> EngineResult<Option<T>> {
        let path = self.data_dir.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(EngineError::storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| EngineError::storage(format!("cannot parse {}: {}", path.display(), e)))
    }

    fn store<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> EngineResult<()> {
        let path = self.data_dir.join(file);
        let tmp_path = self.data_dir.join(format!("{}.tmp", file));

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| EngineError::storage(format!("cannot encode {}: {}", file, e)))?;
        fs::write(&tmp_path, json).map_err(|e| {
            EngineError::storage(format!("cannot write {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            EngineError::storage(format!("cannot replace {}: {}", path.display(), e))
        })?;

        debug!(file = %path.display(), "Stored");
        Ok(())
    }

    fn load_shifts(&self) -> EngineResult<Vec<Shift>> {
        Ok(self.load(SHIFTS_FILE)?.unwrap_or_default())
    }
}

impl ShiftRepository for JsonFileRepository {
    fn get_settings(&self) -> EngineResult<Settings> {
        Ok(self
            .load(SETTINGS_FILE)?
            .unwrap_or_else(|| self.defaults.clone()))
    }

    fn save_settings(&self, settings: &Settings) -> EngineResult<()> {
        let _guard = self.lock();
        self.store(SETTINGS_FILE, settings)
    }

    fn get_dwell_state(&self) -> EngineResult<DwellState> {
        Ok(self.load(DWELL_STATE_FILE)?.unwrap_or_default())
    }

    fn save_dwell_state(&self, state: &DwellState) -> EngineResult<()> {
        let _guard = self.lock();
        self.store(DWELL_STATE_FILE, state)
    }

    fn save_shift(&self, shift: &Shift) -> EngineResult<()> {
        let _guard = self.lock();
        let mut shifts = self.load_shifts()?;
        upsert(&mut shifts, shift);
        self.store(SHIFTS_FILE, &shifts)
    }

    fn get_shifts(&self) -> EngineResult<Vec<Shift>> {
        self.load_shifts()
    }

    fn delete_shift(&self, id: &str) -> EngineResult<()> {
        let _guard = self.lock();
        let mut shifts = self.load_shifts()?;
        shifts.retain(|shift| shift.id != id);
        self.store(SHIFTS_FILE, &shifts)
    }
}
