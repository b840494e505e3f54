//! Pipe-delimited table parsing.

use crate::error::ParseError;

/// A parsed pipe-delimited table with trimmed header names and cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse delimited text into a table.
    ///
    /// The first non-blank line is the header; later blank lines are
    /// skipped. Columns whose trimmed header name is blank (artifacts of
    /// the leading and trailing delimiters) are dropped from the header and
    /// from every row. Rows with fewer cells than the header are padded
    /// with empty cells on the right; rows with more cells fail with
    /// [`ParseError::RowWidth`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((_, header)) = lines.next() else {
            return Err(ParseError::NoTable);
        };

        let header_cells: Vec<&str> = header.split('|').collect();
        let mut keep = Vec::new();
        let mut columns = Vec::new();
        for (position, cell) in header_cells.iter().enumerate() {
            let name = cell.trim();
            if !name.is_empty() {
                keep.push(position);
                columns.push(name.to_string());
            }
        }

        let mut rows = Vec::new();
        for (line, row) in lines {
            let cells: Vec<&str> = row.split('|').collect();
            if cells.len() > header_cells.len() {
                return Err(ParseError::RowWidth {
                    line,
                    expected: header_cells.len(),
                    found: cells.len(),
                });
            }
            rows.push(
                keep.iter()
                    .map(|&position| cells.get(position).map_or("", |cell| cell.trim()).to_string())
                    .collect(),
            );
        }

        Ok(Self { columns, rows })
    }

    /// Position of a named column, if present. The first occurrence wins.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Position of a named column, or a [`ParseError::MissingColumn`].
    pub fn require(&self, name: &str) -> Result<usize, ParseError> {
        self.column(name)
            .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
    }

    /// Header names in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, cell positions aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
