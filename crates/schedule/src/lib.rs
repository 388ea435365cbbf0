//! Biweekly timetable extraction
//!
//! Turns a merged-cell timetable workbook into a flat list of
//! [`ScheduleEntry`] records. Each sheet is expected to follow one layout:
//!
//! - row 1 names student groups, once per block of columns;
//! - from row 2 on, column A holds the day and column B the time slot;
//! - two adjacent rows with the same time slot are the numerator (odd week)
//!   and denominator (even week) halves of that slot;
//! - a class cell lists `subject..., place, teacher` on separate lines.
//!
//! # Examples
//!
//! ```
//! use timetable_schedule::{parse_sheet, Recurrence, ScheduleOptions};
//! use timetable_sheet::Sheet;
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Timetable", "", ""],
//!     vec!["Day", "Time", "Group 1"],
//!     vec!["Monday", "8:00", "Math\nRoom 101\nDr. Smith"],
//!     vec!["Monday", "8:00", "Physics\nRoom 7\nDr. Lee"],
//! ]);
//!
//! let entries = parse_sheet(sheet, &ScheduleOptions::default());
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].recurrence, Recurrence::NumeratorOnly);
//! assert_eq!(entries[1].recurrence, Recurrence::DenominatorOnly);
//! ```
//!
//! ## Reading a file
//!
//! ```no_run
//! # async fn run() -> timetable_schedule::Result<()> {
//! use timetable_schedule::{parse_file, ScheduleOptions};
//!
//! let entries = parse_file("timetable.xlsx", &ScheduleOptions::default()).await?;
//! println!("{} classes", entries.len());
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod content;
mod entry;
mod error;
mod groups;
mod options;
mod recurrence;
mod source;

pub use aggregate::{parse_book, parse_sheet};
pub use content::{CellFields, CellShape, ParsedCell};
pub use entry::{EntrySet, ScheduleEntry};
pub use error::{Result, ScheduleError};
pub use groups::ColumnGroupMap;
pub use options::{ScheduleOptions, DAY_COLUMN, TIME_COLUMN};
pub use recurrence::{classify, Recurrence, RowRole};
pub use source::{parse_bytes, parse_file, read_source};
