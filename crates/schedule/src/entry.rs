use crate::content::CellFields;
use crate::recurrence::Recurrence;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One class in the timetable.
///
/// Two entries are the same class iff every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub teacher: String,
    pub place: String,
    pub group: String,
    pub day: String,
    pub time: String,
    pub recurrence: Recurrence,
}

impl ScheduleEntry {
    /// Combine a cell's fields with the position it was found at
    #[must_use]
    pub fn assemble(
        fields: CellFields,
        group: String,
        day: String,
        time: String,
        recurrence: Recurrence,
    ) -> Self {
        let CellFields {
            subject,
            place,
            teacher,
        } = fields;
        ScheduleEntry {
            subject,
            teacher,
            place,
            group,
            day,
            time,
            recurrence,
        }
    }
}

/// Deduplicated entries of one sheet
#[derive(Debug, Clone, Default)]
pub struct EntrySet {
    entries: IndexSet<ScheduleEntry>,
}

impl EntrySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; returns `false` if an equal entry was already present
    pub fn insert(&mut self, entry: ScheduleEntry) -> bool {
        self.entries.insert(entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ScheduleEntry> {
        self.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str, recurrence: Recurrence) -> ScheduleEntry {
        ScheduleEntry {
            subject: subject.to_string(),
            teacher: "Dr.Smith".to_string(),
            place: "Room101".to_string(),
            group: "G1".to_string(),
            day: "Monday".to_string(),
            time: "8:00".to_string(),
            recurrence,
        }
    }

    #[test]
    fn test_assemble() {
        let fields = CellFields {
            subject: "Math".to_string(),
            place: "Room101".to_string(),
            teacher: "Dr.Smith".to_string(),
        };
        let assembled = ScheduleEntry::assemble(
            fields,
            "G1".to_string(),
            "Monday".to_string(),
            "8:00".to_string(),
            Recurrence::EveryWeek,
        );
        assert_eq!(assembled, entry("Math", Recurrence::EveryWeek));
    }

    #[test]
    fn test_dedup_on_all_fields() {
        let mut set = EntrySet::new();
        assert!(set.insert(entry("Math", Recurrence::EveryWeek)));
        assert!(!set.insert(entry("Math", Recurrence::EveryWeek)));
        assert!(set.insert(entry("Math", Recurrence::NumeratorOnly)));

        let mut other_group = entry("Math", Recurrence::EveryWeek);
        other_group.group = "G2".to_string();
        assert!(set.insert(other_group));

        assert_eq!(set.len(), 3);
        assert_eq!(set.into_vec().len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(entry("Math", Recurrence::NumeratorOnly)).unwrap();
        assert_eq!(json["subject"], "Math");
        assert_eq!(json["teacher"], "Dr.Smith");
        assert_eq!(json["recurrence"], "numerator_only");

        let back: ScheduleEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back.recurrence, Recurrence::NumeratorOnly);
    }
}
