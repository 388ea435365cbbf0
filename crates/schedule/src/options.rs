/// Column holding the day name of each data row
pub const DAY_COLUMN: usize = 0;

/// Column holding the time slot of each data row
pub const TIME_COLUMN: usize = 1;

/// Layout of a timetable sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Row carrying the group labels
    pub group_row: usize,
    /// First row holding schedule data
    pub first_data_row: usize,
    /// Drop fully blank rows before rows are indexed
    pub skip_blank_rows: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            group_row: 1,
            first_data_row: 2,
            skip_blank_rows: true,
        }
    }
}

impl ScheduleOptions {
    /// Set the row carrying the group labels
    #[must_use]
    pub fn with_group_row(mut self, group_row: usize) -> Self {
        self.group_row = group_row;
        self
    }

    /// Set the first row holding schedule data
    #[must_use]
    pub fn with_first_data_row(mut self, first_data_row: usize) -> Self {
        self.first_data_row = first_data_row;
        self
    }

    /// Set whether fully blank rows are dropped before indexing
    #[must_use]
    pub fn with_skip_blank_rows(mut self, skip_blank_rows: bool) -> Self {
        self.skip_blank_rows = skip_blank_rows;
        self
    }
}
