use crate::book::Book;
use crate::cell::CellValue;
use crate::error::Result;
use crate::merge::MergeRegion;
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// Lay a decoded range out on a grid anchored at A1.
///
/// calamine trims ranges to the used area, so the range may start below or
/// right of A1. The grid covers every cell from A1 to the far corner of the
/// used area, so a stray value far out on the sheet costs a full rectangle.
fn range_to_grid(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let (row_offset, col_offset) = range
        .start()
        .map_or((0, 0), |(r, c)| (r as usize, c as usize));
    let (height, width) = range.get_size();
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut data = vec![vec![CellValue::Null; col_offset + width]; row_offset + height];
    for (row, col, value) in range.cells() {
        data[row_offset + row][col_offset + col] = data_to_cell_value(value);
    }
    data
}

/// Decode every sheet of an open workbook, in workbook order, with its merge regions.
fn read_book<RS: Read + Seek>(workbook: &mut Xlsx<RS>) -> Result<Book> {
    workbook.load_merged_regions()?;

    let sheet_names: Vec<String> = workbook.sheet_names().iter().map(|s| s.to_string()).collect();
    let mut book = Book::new();

    for sheet_name in sheet_names {
        let range = workbook.worksheet_range(&sheet_name)?;
        let merges = workbook
            .worksheet_merge_cells(&sheet_name)
            .transpose()?
            .unwrap_or_default();

        let mut sheet = Sheet::with_name(&sheet_name);
        *sheet.data_mut() = range_to_grid(&range);
        for dims in merges {
            sheet.add_merge(MergeRegion::from(dims));
        }

        tracing::debug!(
            sheet = %sheet_name,
            rows = sheet.row_count(),
            cols = sheet.col_count(),
            merges = sheet.merges().len(),
            "decoded worksheet"
        );
        book.add_sheet(&sheet_name, sheet)?;
    }

    Ok(book)
}

impl Book {
    /// Load a book from an Excel file (all sheets, merge regions pending)
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or decoded.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
        read_book(&mut workbook)
    }

    /// Load a book from the raw bytes of an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are not a readable workbook.
    pub fn from_xlsx_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut workbook = Xlsx::new(Cursor::new(bytes))?;
        read_book(&mut workbook)
    }
}
