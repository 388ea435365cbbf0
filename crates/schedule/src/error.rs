use std::path::PathBuf;
use thiserror::Error;
use timetable_sheet::SheetError;

/// Errors that abort a schedule parse
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
