//! Decomposition of one timetable cell into its text lines.
//!
//! Cells list their content top to bottom as
//! `[subject line(s)..., place, teacher]`.

/// How much of a class description a cell carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShape {
    /// No non-empty lines at all
    Blank,
    /// A single line: a placeholder, never a class
    NameOnly,
    /// Subject and place; the teacher line sits in the row below
    Partial,
    /// Subject, place and teacher
    Full,
}

/// The non-empty lines of a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCell {
    lines: Vec<String>,
}

/// Subject, place and teacher as split from a cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellFields {
    pub subject: String,
    pub place: String,
    pub teacher: String,
}

impl ParsedCell {
    /// Split raw cell text on line breaks, dropping empty lines
    #[must_use]
    pub fn parse(text: &str) -> Self {
        ParsedCell {
            lines: text
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> CellShape {
        match self.lines.len() {
            0 => CellShape::Blank,
            1 => CellShape::NameOnly,
            2 => CellShape::Partial,
            _ => CellShape::Full,
        }
    }

    #[must_use]
    pub fn is_name_only(&self) -> bool {
        self.shape() == CellShape::NameOnly
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last non-empty line, which is the teacher line of a full cell
    #[must_use]
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Split into subject, place and teacher.
    ///
    /// A partial cell takes `borrowed_teacher` as its missing last line. Without
    /// one the two lines become place and teacher and the subject stays empty.
    #[must_use]
    pub fn into_fields(self, borrowed_teacher: Option<String>) -> CellFields {
        let shape = self.shape();
        let mut lines = self.lines;
        if shape == CellShape::Partial {
            lines.extend(borrowed_teacher);
        }

        let teacher = lines.pop().unwrap_or_default();
        let place = lines.pop().unwrap_or_default();
        CellFields {
            subject: lines.join("\n"),
            place,
            teacher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cell() {
        let cell = ParsedCell::parse("Math\nRoom101\nDr.Smith");
        assert_eq!(cell.shape(), CellShape::Full);

        let fields = cell.into_fields(None);
        assert_eq!(fields.subject, "Math");
        assert_eq!(fields.place, "Room101");
        assert_eq!(fields.teacher, "Dr.Smith");
    }

    #[test]
    fn test_multi_line_subject() {
        let fields = ParsedCell::parse("Linear\nAlgebra\n\nRoom 5\nProf. Ivanova").into_fields(None);
        assert_eq!(fields.subject, "Linear\nAlgebra");
        assert_eq!(fields.place, "Room 5");
        assert_eq!(fields.teacher, "Prof. Ivanova");
    }

    #[test]
    fn test_full_cell_ignores_borrowed_line() {
        let fields =
            ParsedCell::parse("Math\nRoom101\nDr.Smith").into_fields(Some("Dr.Lee".to_string()));
        assert_eq!(fields.teacher, "Dr.Smith");
    }

    #[test]
    fn test_shapes() {
        assert_eq!(ParsedCell::parse("").shape(), CellShape::Blank);
        assert_eq!(ParsedCell::parse("\n\n").shape(), CellShape::Blank);
        assert_eq!(ParsedCell::parse("Group 1").shape(), CellShape::NameOnly);
        assert_eq!(ParsedCell::parse("\nGroup 1\n").shape(), CellShape::NameOnly);
        assert_eq!(ParsedCell::parse("Math\nRoom101").shape(), CellShape::Partial);
    }

    #[test]
    fn test_crlf_line_breaks() {
        let cell = ParsedCell::parse("Math\r\nRoom101\r\nDr.Smith");
        assert_eq!(cell.lines(), ["Math", "Room101", "Dr.Smith"]);
        assert_eq!(cell.last_line(), Some("Dr.Smith"));
    }

    #[test]
    fn test_partial_with_borrowed_teacher() {
        let fields = ParsedCell::parse("Math\nRoom101").into_fields(Some("Dr.Lee".to_string()));
        assert_eq!(
            fields,
            CellFields {
                subject: "Math".to_string(),
                place: "Room101".to_string(),
                teacher: "Dr.Lee".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_without_borrowed_teacher() {
        let fields = ParsedCell::parse("Math\nRoom101").into_fields(None);
        assert_eq!(fields.subject, "");
        assert_eq!(fields.place, "Math");
        assert_eq!(fields.teacher, "Room101");
    }
}
