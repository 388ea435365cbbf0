//! Sheet/Book module for timetable
//!
//! Holds decoded workbooks as plain cell grids together with the merge
//! regions the spreadsheet declared for each sheet.
//!
//! # Examples
//!
//! ## Expanding merged cells
//!
//! ```
//! use timetable_sheet::{CellValue, MergeRegion, Sheet};
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec![CellValue::from("Group 1"), CellValue::Null, CellValue::Null],
//! ]);
//! sheet.add_merge(MergeRegion::from_a1("A1:C1").unwrap());
//!
//! assert_eq!(sheet.expand_merges(), 1);
//! assert_eq!(sheet.text_at(0, 2).as_deref(), Some("Group 1"));
//! assert!(sheet.merges().is_empty());
//! ```
//!
//! ## Loading a workbook
//!
//! ```no_run
//! use timetable_sheet::Book;
//!
//! let book = Book::from_xlsx("timetable.xlsx").unwrap();
//! for sheet in book.into_sheets() {
//!     println!("{}: {} rows, {} merges", sheet.name(), sheet.row_count(), sheet.merges().len());
//! }
//! ```

pub mod a1_notation;
mod book;
mod cell;
mod error;
mod merge;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export merge region type.
pub use merge::MergeRegion;
/// Re-export sheet type.
pub use sheet::Sheet;
