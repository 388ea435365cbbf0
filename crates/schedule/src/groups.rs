use std::collections::BTreeMap;
use timetable_sheet::a1_notation::column_index_to_letters;
use timetable_sheet::Sheet;

/// Mapping from column label to the student group that owns the column.
///
/// The header row names a group only in the first column of its block. Every
/// label from a defined header up to the next defined one belongs to the
/// earlier group.
///
/// The gap fill steps over the first character of each label, so sheets
/// wider than 26 columns (labels `AA` and beyond) do not resolve correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroupMap {
    groups: BTreeMap<String, String>,
}

impl ColumnGroupMap {
    /// Build the mapping from the header row of an expanded sheet
    #[must_use]
    pub fn resolve(sheet: &Sheet, header_row: usize) -> Self {
        let mut defined: Vec<(String, String)> = sheet
            .data()
            .get(header_row)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| !cell.is_blank())
                    .map(|(col, cell)| (column_index_to_letters(col), cell.as_str()))
                    .collect()
            })
            .unwrap_or_default();
        defined.sort_by(|a, b| a.0.cmp(&b.0));

        let mut groups = BTreeMap::new();
        for pair in defined.windows(2) {
            let (prev_label, prev_group) = &pair[0];
            let (curr_label, _) = &pair[1];
            for label in labels_between(prev_label, curr_label) {
                groups.insert(label, prev_group.clone());
            }
        }
        if let Some((label, group)) = defined.last() {
            groups.insert(label.clone(), group.clone());
        }

        tracing::debug!(
            sheet = %sheet.name(),
            defined = defined.len(),
            resolved = groups.len(),
            "resolved group columns"
        );
        ColumnGroupMap { groups }
    }

    /// Group owning the column, if the header covers it
    #[must_use]
    pub fn group_for(&self, label: &str) -> Option<&str> {
        self.groups.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over (label, group) pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Single-letter labels from `start` up to, but excluding, `end`
fn labels_between(start: &str, end: &str) -> Vec<String> {
    let (Some(from), Some(to)) = (start.chars().next(), end.chars().next()) else {
        return Vec::new();
    };
    (u32::from(from)..u32::from(to))
        .filter_map(char::from_u32)
        .map(String::from)
        .collect()
}
