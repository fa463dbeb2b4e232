//! User settings.
//!
//! Settings carry the pay rate, the rounding grid, the workplace and the
//! dwell-confirmation mode the tracker reads on every sample.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkplaceLocation;
use crate::error::{EngineError, EngineResult};

/// Dwell time required before a shift is confirmed in normal mode.
pub const STANDARD_CONFIRM_SECONDS: i64 = 60 * 60;

/// Dwell time required before a shift is confirmed in fast-confirm mode.
pub const FAST_CONFIRM_SECONDS: i64 = 30;

/// Largest accepted hourly rate, in currency units.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// The time grid shift boundaries are floored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Floor to the start of the hour.
    #[default]
    Hour,
    /// Floor to :00 or :30.
    HalfHour,
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Hour => write!(f, "hour"),
            RoundingMode::HalfHour => write!(f, "half_hour"),
        }
    }
}

/// Persisted user settings.
///
/// # Example
///
/// ```
/// use shift_tracker::models::Settings;
/// use chrono::Duration;
///
/// let mut settings = Settings::default();
/// assert_eq!(settings.confirm_threshold(), Duration::hours(1));
///
/// settings.fast_confirm_mode = true;
/// assert_eq!(settings.confirm_threshold(), Duration::seconds(30));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pay per hour worked. Always positive.
    pub hourly_rate: Decimal,
    /// Grid used to floor shift boundaries.
    pub rounding_mode: RoundingMode,
    /// The single configured work site.
    pub workplace: WorkplaceLocation,
    /// Shortens the dwell confirmation from one hour to thirty seconds.
    #[serde(default)]
    pub fast_confirm_mode: bool,
    /// Whether the user wants shift-ended alerts.
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
}

fn default_notifications_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: Decimal::new(1500, 2),
            rounding_mode: RoundingMode::Hour,
            workplace: WorkplaceLocation {
                latitude: 37.7749,
                longitude: -122.4194,
                address: "Default Workplace".to_string(),
            },
            fast_confirm_mode: false,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Minimum continuous time inside the geofence before a shift starts.
    pub fn confirm_threshold(&self) -> Duration {
        if self.fast_confirm_mode {
            Duration::seconds(FAST_CONFIRM_SECONDS)
        } else {
            Duration::seconds(STANDARD_CONFIRM_SECONDS)
        }
    }

    /// Checks the settings invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the hourly rate is not positive or
    /// exceeds [`MAX_HOURLY_RATE`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "hourly_rate",
                format!("must be greater than zero, got {}", self.hourly_rate),
            ));
        }
        if self.hourly_rate > MAX_HOURLY_RATE {
            return Err(EngineError::invalid_input(
                "hourly_rate",
                format!("must not exceed {}, got {}", MAX_HOURLY_RATE, self.hourly_rate),
            ));
        }
        Ok(())
    }

    /// Merges a partial update over these settings and validates the result.
    ///
    /// Fields absent from the update keep their current values. The receiver
    /// is left untouched when validation fails.
    pub fn merged(&self, update: SettingsUpdate) -> EngineResult<Settings> {
        let merged = Settings {
            hourly_rate: update.hourly_rate.unwrap_or(self.hourly_rate),
            rounding_mode: update.rounding_mode.unwrap_or(self.rounding_mode),
            workplace: update.workplace.unwrap_or_else(|| self.workplace.clone()),
            fast_confirm_mode: update.fast_confirm_mode.unwrap_or(self.fast_confirm_mode),
            notifications_enabled: update
                .notifications_enabled
                .unwrap_or(self.notifications_enabled),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// A partial settings change; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// New hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// New rounding grid.
    #[serde(default)]
    pub rounding_mode: Option<RoundingMode>,
    /// New workplace.
    #[serde(default)]
    pub workplace: Option<WorkplaceLocation>,
    /// New fast-confirm toggle.
    #[serde(default)]
    pub fast_confirm_mode: Option<bool>,
    /// New notifications toggle.
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
}
