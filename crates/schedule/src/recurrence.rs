use crate::content::ParsedCell;
use crate::options::TIME_COLUMN;
use serde::{Deserialize, Serialize};
use std::fmt;
use timetable_sheet::Sheet;

/// Which weeks of the biweekly rotation a class runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    EveryWeek,
    /// Odd (numerator) weeks only
    NumeratorOnly,
    /// Even (denominator) weeks only
    DenominatorOnly,
}

impl Recurrence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::EveryWeek => "every_week",
            Recurrence::NumeratorOnly => "numerator_only",
            Recurrence::DenominatorOnly => "denominator_only",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a data row within its time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// First row of a pair sharing one time slot
    Numerator,
    /// Any other data row, compared against the row above
    Denominator,
}

impl RowRole {
    /// A row is a numerator row when the next row has the same time slot text
    #[must_use]
    pub fn of(sheet: &Sheet, row: usize) -> Self {
        if row + 1 < sheet.row_count()
            && sheet.text_at(row, TIME_COLUMN) == sheet.text_at(row + 1, TIME_COLUMN)
        {
            RowRole::Numerator
        } else {
            RowRole::Denominator
        }
    }

    /// The row a cell in `row` is compared against
    #[must_use]
    pub fn paired_row(self, row: usize) -> Option<usize> {
        match self {
            RowRole::Numerator => Some(row + 1),
            RowRole::Denominator => row.checked_sub(1),
        }
    }
}

/// Decide how often the class in `current` recurs.
///
/// `paired` is the text of the same column in the row given by
/// [`RowRole::paired_row`], or `None` when that cell is empty. Returns `None`
/// for a denominator cell repeating the cell above, which was already
/// recorded as an every-week class from the numerator row.
#[must_use]
pub fn classify(role: RowRole, current: &str, paired: Option<&str>) -> Option<Recurrence> {
    match role {
        RowRole::Numerator => Some(match paired {
            None => Recurrence::NumeratorOnly,
            Some(next) if ParsedCell::parse(next).is_name_only() => Recurrence::EveryWeek,
            Some(next) if next != current => Recurrence::NumeratorOnly,
            Some(_) => Recurrence::EveryWeek,
        }),
        RowRole::Denominator => match paired {
            Some(prev) if prev == current => None,
            _ => Some(Recurrence::DenominatorOnly),
        },
    }
}
