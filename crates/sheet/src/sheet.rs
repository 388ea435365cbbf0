use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::merge::MergeRegion;

/// A sheet representing a 2D grid of cells (row-major storage)
///
/// Alongside the cells a sheet carries the merge regions reported by the
/// decoder. They stay pending until [`Sheet::expand_merges`] bakes them into
/// the grid.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    merges: Vec<MergeRegion>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            merges: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            merges: Vec::new(),
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Text of the cell at (row, col), or `None` when no cell holds a value there
    #[must_use]
    pub fn text_at(&self, row: usize, col: usize) -> Option<String> {
        self.get(row, col).ok().and_then(CellValue::text)
    }

    /// Get a reference to the underlying data
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get a mutable reference to the underlying data
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    // ===== Merge Regions =====

    /// Merge regions not yet expanded into the grid
    #[must_use]
    pub fn merges(&self) -> &[MergeRegion] {
        &self.merges
    }

    /// Register a merge region
    pub fn add_merge(&mut self, region: MergeRegion) {
        self.merges.push(region);
    }

    /// Bake every pending merge region into the grid and drop the region list.
    ///
    /// Regions whose top-left cell is empty are skipped. Returns the number
    /// of regions that were expanded.
    pub fn expand_merges(&mut self) -> usize {
        let mut expanded = 0;
        for region in std::mem::take(&mut self.merges) {
            if region.expand_into(&mut self.data) {
                expanded += 1;
            } else {
                tracing::trace!(sheet = %self.name, %region, "merge anchor is empty, skipping");
            }
        }
        expanded
    }

    /// Remove empty rows (rows where all cells are null or empty strings)
    pub fn remove_empty_rows(&mut self) {
        self.data
            .retain(|row| !row.iter().all(CellValue::is_blank));
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_access() {
        let sheet = Sheet::from_data(vec![vec!["Mon", "8:00"], vec!["Tue", "9:40"]]);

        assert_eq!(sheet.get(1, 1).unwrap(), &CellValue::from("9:40"));
        assert_eq!(sheet.text_at(0, 1).as_deref(), Some("8:00"));
        assert!(matches!(
            sheet.get(5, 0),
            Err(SheetError::IndexOutOfBounds { row: 5, .. })
        ));
    }

    #[test]
    fn test_text_at_missing() {
        let sheet = Sheet::from_data(vec![vec![CellValue::Null, CellValue::from("a")]]);
        assert_eq!(sheet.text_at(0, 0), None);
        assert_eq!(sheet.text_at(0, 9), None);
        assert_eq!(sheet.text_at(9, 0), None);
    }

    #[test]
    fn test_expand_merges_drains_regions() {
        let mut sheet = Sheet::from_data(vec![
            vec![CellValue::from("G1"), CellValue::Null, CellValue::Null],
            vec![CellValue::Null, CellValue::Null, CellValue::from("x")],
        ]);
        sheet.add_merge(MergeRegion::from_a1("A1:C1").unwrap());
        sheet.add_merge(MergeRegion::from_a1("A2:B2").unwrap());

        assert_eq!(sheet.expand_merges(), 1);
        assert!(sheet.merges().is_empty());
        assert_eq!(sheet.text_at(0, 2).as_deref(), Some("G1"));
        assert_eq!(sheet.text_at(1, 1), None);

        // Nothing left to expand
        assert_eq!(sheet.expand_merges(), 0);
    }

    #[test]
    fn test_remove_empty_rows() {
        let mut sheet = Sheet::from_data(vec![
            vec![CellValue::from("a")],
            vec![CellValue::Null],
            vec![CellValue::from("")],
            vec![CellValue::from("b")],
        ]);
        sheet.remove_empty_rows();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.text_at(1, 0).as_deref(), Some("b"));
    }

    #[test]
    fn test_col_count_ragged() {
        let sheet = Sheet::from_data(vec![vec![1], vec![1, 2, 3]]);
        assert_eq!(sheet.col_count(), 3);
    }
}
