//! Raw text model of a sheet.

/// A data row as read from a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based position in the file, counting the header as row 1.
    pub number: usize,
    /// Cell texts in column order. May be shorter or longer than the header.
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Returns the cell at the 0-based column index, or `""` if the row is
    /// too short to have one.
    #[must_use]
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// Returns true if every cell is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// A header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    header: Vec<String>,
    rows: Vec<SheetRow>,
}

impl Sheet {
    /// Creates a sheet with the given header and no rows.
    #[must_use]
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Appends a row, numbering it after the existing rows.
    pub fn push_row(&mut self, cells: Vec<String>) {
        let number = self.rows.len() + 2;
        self.rows.push(SheetRow { number, cells });
    }

    /// Appends a row keeping the given file row number.
    pub(crate) fn push_numbered(&mut self, number: usize, cells: Vec<String>) {
        self.rows.push(SheetRow { number, cells });
    }

    /// Returns the header cells.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the data rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_numbered_after_header() {
        let mut sheet = Sheet::new(vec!["A".into()]);
        sheet.push_row(vec!["x".into()]);
        sheet.push_row(vec!["y".into()]);

        assert_eq!(sheet.rows()[0].number, 2);
        assert_eq!(sheet.rows()[1].number, 3);
    }

    #[test]
    fn short_row_reads_empty_cell() {
        let row = SheetRow {
            number: 2,
            cells: vec!["a".into()],
        };
        assert_eq!(row.cell(0), "a");
        assert_eq!(row.cell(5), "");
    }

    #[test]
    fn blank_row() {
        let row = SheetRow {
            number: 2,
            cells: vec![String::new(), String::new()],
        };
        assert!(row.is_blank());
    }
}
