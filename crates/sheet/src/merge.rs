use crate::a1_notation::{parse_a1_range, to_a1_notation};
use crate::cell::CellValue;
use crate::error::Result;
use std::fmt;

/// A rectangular block of cells that displays one value.
///
/// Bounds are 0-based `(row, col)` pairs and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRegion {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl MergeRegion {
    /// Create a region from its top-left and bottom-right corners
    #[must_use]
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        MergeRegion {
            start: (start.0.min(end.0), start.1.min(end.1)),
            end: (start.0.max(end.0), start.1.max(end.1)),
        }
    }

    /// Create a region from A1 range notation (e.g. "B2:D3")
    pub fn from_a1(notation: &str) -> Result<Self> {
        let (start, end) = parse_a1_range(notation)?;
        Ok(Self::new(start, end))
    }

    /// Copy the anchor's value into every covered cell of `data`.
    ///
    /// The anchor value is written as a string cell. When the region reaches
    /// past the grid, only the rows it covers are extended with `Null` cells
    /// out to its right edge; other rows keep their length. A whole-row merge
    /// (`A1:XFD1`) therefore allocates a single 16384-cell row. Returns
    /// `false` without touching the grid when the anchor holds no value.
    pub fn expand_into(&self, data: &mut Vec<Vec<CellValue>>) -> bool {
        let (top, left) = self.start;
        let (bottom, right) = self.end;

        let value = match data.get(top).and_then(|row| row.get(left)) {
            Some(cell) if !cell.is_null() => cell.to_string_cell(),
            _ => return false,
        };

        if data.len() <= bottom {
            data.resize_with(bottom + 1, Vec::new);
        }
        for row in &mut data[top..=bottom] {
            if row.len() <= right {
                row.resize(right + 1, CellValue::Null);
            }
            for cell in &mut row[left..=right] {
                *cell = value.clone();
            }
        }

        true
    }
}

impl From<calamine::Dimensions> for MergeRegion {
    fn from(dims: calamine::Dimensions) -> Self {
        MergeRegion::new(
            (dims.start.0 as usize, dims.start.1 as usize),
            (dims.end.0 as usize, dims.end.1 as usize),
        )
    }
}

impl fmt::Display for MergeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            to_a1_notation(self.start.0, self.start.1),
            to_a1_notation(self.end.0, self.end.1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|s| {
                        if s.is_empty() {
                            CellValue::Null
                        } else {
                            CellValue::from(*s)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_from_a1() {
        let region = MergeRegion::from_a1("C2:B4").unwrap();
        assert_eq!(region.start, (1, 1));
        assert_eq!(region.end, (3, 2));
        assert_eq!(region.to_string(), "B2:C4");
    }

    #[test]
    fn test_expand_fills_rectangle() {
        let mut data = grid(&[&["Mon", "8:00", "Math", "x"], &["", "", "", "y"]]);
        let region = MergeRegion::new((0, 2), (1, 3));

        assert!(region.expand_into(&mut data));
        for row in 0..=1 {
            for col in 2..=3 {
                assert_eq!(data[row][col], CellValue::String("Math".to_string()));
            }
        }
        assert_eq!(data[1][0], CellValue::Null);
    }

    #[test]
    fn test_expand_tags_as_string() {
        let mut data = vec![vec![CellValue::Int(101), CellValue::Null]];
        MergeRegion::new((0, 0), (0, 1)).expand_into(&mut data);
        assert_eq!(data[0][1], CellValue::String("101".to_string()));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut once = grid(&[&["G1", "", ""], &["a", "b", "c"]]);
        let region = MergeRegion::new((0, 0), (0, 2));
        region.expand_into(&mut once);

        let mut twice = once.clone();
        region.expand_into(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_anchor_leaves_grid_untouched() {
        let mut data = grid(&[&["", "keep"], &["", ""]]);
        let before = data.clone();

        assert!(!MergeRegion::new((0, 0), (1, 1)).expand_into(&mut data));
        assert_eq!(data, before);
    }

    #[test]
    fn test_expand_grows_grid() {
        let mut data = grid(&[&["Lecture"]]);
        MergeRegion::new((0, 0), (2, 1)).expand_into(&mut data);

        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|row| row.len() == 2));
        assert_eq!(data[2][1], CellValue::String("Lecture".to_string()));
    }

    #[test]
    fn test_expand_pads_only_covered_rows() {
        let mut data = grid(&[&["Timetable", "", ""], &["Day", "Time", "G1"], &["Mon", "8:00", ""]]);
        MergeRegion::new((0, 0), (0, 16383)).expand_into(&mut data);

        assert_eq!(data[0].len(), 16384);
        assert_eq!(data[0][16383], CellValue::String("Timetable".to_string()));
        assert_eq!(data[1].len(), 3);
        assert_eq!(data[2].len(), 3);
    }
}
