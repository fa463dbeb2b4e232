//! CSV export of the shift log.
//!
//! One row per shift under the header
//! `Date,Start Time,End Time,Duration (hours),Pay,Notes`. Times are the
//! rounded boundaries, duration is in hours to two decimals, pay carries a
//! `$` prefix and commas in notes become semicolons.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

/// Column names, in order.
pub const CSV_HEADER: [&str; 6] = [
    "Date",
    "Start Time",
    "End Time",
    "Duration (hours)",
    "Pay",
    "Notes",
];

/// One exported row, as written and as read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCsvRow {
    /// Start date, `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Rounded start, `HH:MM`.
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// Rounded end, `HH:MM`.
    #[serde(rename = "End Time")]
    pub end_time: String,
    /// Rounded duration in hours, two decimals.
    #[serde(rename = "Duration (hours)")]
    pub duration_hours: String,
    /// Pay, `$` and two decimals.
    #[serde(rename = "Pay")]
    pub pay: String,
    /// Notes with commas replaced by semicolons.
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&Shift> for ShiftCsvRow {
    fn from(shift: &Shift) -> Self {
        Self {
            date: shift.start_time.format("%Y-%m-%d").to_string(),
            start_time: shift.rounded_start_time.format("%H:%M").to_string(),
            end_time: shift.rounded_end_time.format("%H:%M").to_string(),
            duration_hours: format!("{:.2}", shift.duration_hours().round_dp(2)),
            pay: format!("${:.2}", shift.pay.round_dp(2)),
            notes: shift.notes.as_deref().unwrap_or_default().replace(',', ";"),
        }
    }
}

fn csv_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::storage(format!("CSV error: {}", e))
}

fn write_rows<W: std::io::Write>(writer: W, shifts: &[Shift]) -> EngineResult<W> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER).map_err(csv_error)?;
    for shift in shifts {
        let row = ShiftCsvRow::from(shift);
        wtr.write_record([
            &row.date,
            &row.start_time,
            &row.end_time,
            &row.duration_hours,
            &row.pay,
            &row.notes,
        ])
        .map_err(csv_error)?;
    }
    wtr.into_inner().map_err(csv_error)
}

/// Renders shifts as CSV text.
///
/// The header is always written, even for an empty log.
///
/// # Example
///
/// ```
/// use shift_tracker::export::export_csv;
///
/// let csv = export_csv(&[]).unwrap();
/// assert_eq!(csv, "Date,Start Time,End Time,Duration (hours),Pay,Notes\n");
/// ```
pub fn export_csv(shifts: &[Shift]) -> EngineResult<String> {
    let bytes = write_rows(Vec::new(), shifts)?;
    String::from_utf8(bytes).map_err(csv_error)
}

/// Writes the CSV export to a file.
pub fn write_csv_file<P: AsRef<Path>>(path: P, shifts: &[Shift]) -> EngineResult<()> {
    let file = std::fs::File::create(path.as_ref()).map_err(|e| {
        EngineError::storage(format!("cannot create {}: {}", path.as_ref().display(), e))
    })?;
    write_rows(file, shifts)?;
    Ok(())
}

/// Reads an export back into rows.
pub fn parse_csv(text: &str) -> EngineResult<Vec<ShiftCsvRow>> {
    let mut rdr = ::csv::Reader::from_reader(text.as_bytes());
    rdr.deserialize::<ShiftCsvRow>()
        .map(|row| row.map_err(csv_error))
        .collect()
}

/// File name used for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("shifts_export_{}.csv", date.format("%Y-%m-%d"))
}
