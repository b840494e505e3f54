//! Error types for the packlist-core library.

use thiserror::Error;

/// Main error type for the packlist library.
#[derive(Error, Debug)]
pub enum PacklistError {
    /// Word document reading error.
    #[error("document error: {0}")]
    Docx(#[from] DocxError),

    /// Annexure table parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Excel workbook error.
    #[error("workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to reading `.docx` files.
#[derive(Error, Debug)]
pub enum DocxError {
    /// The file is not a readable ZIP archive.
    #[error("failed to open archive: {0}")]
    Archive(String),

    /// The archive has no `word/document.xml` part.
    #[error("archive has no word/document.xml part")]
    MissingDocument,

    /// The document XML could not be parsed.
    #[error("malformed document XML: {0}")]
    Xml(String),

    /// Failed to read a part out of the archive.
    #[error("failed to read document part: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to parsing the extracted annexure table.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The extracted text contains no table at all.
    #[error("no annexure table found")]
    NoTable,

    /// A column the layout requires is absent from the header.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A data row is wider than the header.
    #[error("row {line} has {found} cells but the header has {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors related to Excel workbook I/O.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// Failed to write a workbook.
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Failed to read a workbook.
    #[error("failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The workbook contains no sheets.
    #[error("workbook has no sheets")]
    NoSheets,

    /// The expected header row is absent.
    #[error("missing header row")]
    MissingHeader,

    /// A column the layout requires is absent from the header row.
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

/// Result type for the packlist library.
pub type Result<T> = std::result::Result<T, PacklistError>;
