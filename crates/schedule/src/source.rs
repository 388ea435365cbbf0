use crate::aggregate::parse_book;
use crate::entry::ScheduleEntry;
use crate::error::{Result, ScheduleError};
use crate::options::ScheduleOptions;
use std::path::Path;
use timetable_sheet::Book;

/// Read the raw bytes of a timetable workbook.
///
/// This is the only await point of a parse; dropping the future abandons it.
pub async fn read_source<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ScheduleError::Source {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read workbook");
    Ok(bytes)
}

/// Decode workbook bytes and extract all of its entries
pub fn parse_bytes(bytes: Vec<u8>, options: &ScheduleOptions) -> Result<Vec<ScheduleEntry>> {
    let book = Book::from_xlsx_bytes(bytes)?;
    Ok(parse_book(book, options))
}

/// Read a workbook from disk and extract all of its entries.
///
/// Any read or decode failure aborts the whole parse.
pub async fn parse_file<P: AsRef<Path>>(
    path: P,
    options: &ScheduleOptions,
) -> Result<Vec<ScheduleEntry>> {
    let bytes = read_source(path).await?;
    parse_bytes(bytes, options)
}
