use crate::error::{Result, SheetError};

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 0-based indices
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    if notation.is_empty() {
        return Err(SheetError::InvalidCellNotation(notation.to_string()));
    }

    let notation = notation.to_uppercase();

    let split_pos = notation
        .bytes()
        .position(|b| b.is_ascii_digit())
        .unwrap_or(0);

    if split_pos == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    let (col_part, row_part) = notation.split_at(split_pos);

    let col = column_letters_to_index(col_part)?;
    let row = row_part
        .parse::<usize>()
        .map_err(|_| SheetError::InvalidCellNotation(notation.clone()))?;

    if row == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    Ok((row - 1, col))
}

/// Parse A1-style range notation (e.g., "A1:C3")
/// Returns ((start_row, start_col), (end_row, end_col)) as 0-based indices
pub fn parse_a1_range(notation: &str) -> Result<((usize, usize), (usize, usize))> {
    let parts: Vec<&str> = notation.split(':').collect();

    if parts.len() != 2 {
        // If no colon, treat as single cell
        let cell = parse_a1(notation)?;
        return Ok((cell, cell));
    }

    let (start_row, start_col) = parse_a1(parts[0])?;
    let (end_row, end_col) = parse_a1(parts[1])?;

    Ok((
        (start_row.min(end_row), start_col.min(end_col)),
        (start_row.max(end_row), start_col.max(end_col)),
    ))
}

/// Convert column letters to 0-based column index
/// A=0, B=1, ... Z=25, AA=26, AB=27, ...
pub fn column_letters_to_index(col_str: &str) -> Result<usize> {
    if col_str.is_empty() {
        return Err(SheetError::InvalidCellNotation(col_str.to_string()));
    }

    let mut col = 0;
    for b in col_str.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(SheetError::InvalidCellNotation(col_str.to_string()));
        }
        col = col * 26 + (b - b'A') as usize + 1;
    }

    Ok(col - 1)
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
pub fn column_index_to_letters(mut col: usize) -> String {
    let mut result = String::new();
    col += 1; // Convert to 1-based for calculation

    while col > 0 {
        col -= 1;
        result.insert(0, ((col % 26) as u8 + b'A') as char);
        col /= 26;
    }

    result
}

/// Convert (row, col) to A1 notation
/// (0, 0) = "A1", (0, 1) = "B1", etc.
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row + 1)
}
