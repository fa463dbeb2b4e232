//! Shift log export.

mod csv;

pub use self::csv::{
    CSV_HEADER, ShiftCsvRow, export_csv, export_file_name, parse_csv, write_csv_file,
};
