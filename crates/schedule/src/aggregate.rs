use crate::content::{CellShape, ParsedCell};
use crate::entry::{EntrySet, ScheduleEntry};
use crate::groups::ColumnGroupMap;
use crate::options::{ScheduleOptions, DAY_COLUMN, TIME_COLUMN};
use crate::recurrence::{classify, RowRole};
use timetable_sheet::a1_notation::{column_index_to_letters, to_a1_notation};
use timetable_sheet::{Book, Sheet};

/// Extract the deduplicated entries of one sheet.
///
/// The sheet is consumed: its merge regions are expanded into the grid,
/// blank rows are dropped when configured, and every data cell is classified
/// against its paired row.
#[must_use]
pub fn parse_sheet(mut sheet: Sheet, options: &ScheduleOptions) -> Vec<ScheduleEntry> {
    let expanded = sheet.expand_merges();
    if options.skip_blank_rows {
        sheet.remove_empty_rows();
    }

    let groups = ColumnGroupMap::resolve(&sheet, options.group_row);
    let mut entries = EntrySet::new();

    for row in options.first_data_row..sheet.row_count() {
        let role = RowRole::of(&sheet, row);
        let day = sheet.text_at(row, DAY_COLUMN).unwrap_or_default();
        let time = sheet.text_at(row, TIME_COLUMN).unwrap_or_default();
        let width = sheet.data()[row].len();

        for col in (TIME_COLUMN + 1)..width {
            let Some(text) = sheet.text_at(row, col) else {
                continue;
            };
            let cell = ParsedCell::parse(&text);
            let shape = cell.shape();
            if matches!(shape, CellShape::Blank | CellShape::NameOnly) {
                continue;
            }

            let paired = role
                .paired_row(row)
                .and_then(|paired_row| sheet.text_at(paired_row, col));
            let Some(recurrence) = classify(role, &text, paired.as_deref()) else {
                tracing::trace!(cell = %to_a1_notation(row, col), "repeats the numerator row");
                continue;
            };

            let borrowed_teacher = if shape == CellShape::Partial {
                sheet
                    .text_at(row + 1, col)
                    .and_then(|below| ParsedCell::parse(&below).last_line().map(str::to_string))
            } else {
                None
            };

            let label = column_index_to_letters(col);
            let group = match groups.group_for(&label) {
                Some(group) => group.to_string(),
                None => {
                    tracing::debug!(column = %label, "column is outside the group header");
                    String::new()
                }
            };

            entries.insert(ScheduleEntry::assemble(
                cell.into_fields(borrowed_teacher),
                group,
                day.clone(),
                time.clone(),
                recurrence,
            ));
        }
    }

    tracing::debug!(
        sheet = %sheet.name(),
        merges = expanded,
        groups = groups.len(),
        entries = entries.len(),
        "parsed sheet"
    );
    entries.into_vec()
}

/// Extract entries from every sheet, concatenated in workbook order.
///
/// Sheets are deduplicated on their own only; the same class appearing on two
/// sheets is reported twice.
#[must_use]
pub fn parse_book(book: Book, options: &ScheduleOptions) -> Vec<ScheduleEntry> {
    let mut schedule = Vec::new();
    for sheet in book.into_sheets() {
        schedule.extend(parse_sheet(sheet, options));
    }
    tracing::info!(entries = schedule.len(), "parsed workbook");
    schedule
}
