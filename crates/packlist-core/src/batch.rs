//! Multi-document consolidation.

use tracing::{debug, warn};

use crate::annexure;
use crate::docx;
use crate::error::PacklistError;
use crate::models::record::LineItem;
use crate::xlsx;

/// A source document queued for consolidation.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Display name used in reports, typically the file name.
    pub name: String,

    /// How the bytes should be interpreted.
    pub kind: SourceKind,

    /// Raw file contents.
    pub data: Vec<u8>,
}

/// Supported source document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A Word document carrying the annexure.
    Docx,

    /// A previously exported per-document workbook.
    Workbook,
}

/// A document that could not be processed.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Display name of the failing document.
    pub name: String,

    /// The error that stopped it.
    pub error: PacklistError,
}

/// Outcome of a consolidation run.
#[derive(Debug, Default)]
pub struct Consolidation {
    /// Records from all successful documents, in input order.
    pub records: Vec<LineItem>,

    /// Documents that failed, with their errors.
    pub failures: Vec<DocumentFailure>,
}

/// Process a set of documents independently and concatenate their records.
///
/// A failing document is recorded in [`Consolidation::failures`] and never
/// aborts the rest of the batch. The first record of each successful
/// document is discarded before concatenation, as the historical
/// consolidation flow has always done.
pub fn consolidate<I>(documents: I) -> Consolidation
where
    I: IntoIterator<Item = SourceDocument>,
{
    let mut batch = Consolidation::default();
    for document in documents {
        match process_document(&document) {
            Ok(mut records) => {
                // TODO: confirm with the logistics team whether the first
                // record is a layout artifact or real data before lifting
                // this drop.
                if !records.is_empty() {
                    records.remove(0);
                }
                batch.records.extend(records);
            }
            Err(error) => {
                warn!("failed to process {}: {}", document.name, error);
                batch.failures.push(DocumentFailure {
                    name: document.name,
                    error,
                });
            }
        }
    }

    debug!(
        "consolidated {} records, {} documents failed",
        batch.records.len(),
        batch.failures.len()
    );
    batch
}

/// Run the single-document pipeline for the source kind.
///
/// Word documents go through annexure extraction and normalization;
/// workbooks are read back directly.
pub fn process_document(document: &SourceDocument) -> Result<Vec<LineItem>, PacklistError> {
    match document.kind {
        SourceKind::Docx => {
            let paragraphs = docx::read_paragraphs(&document.data)?;
            let text = annexure::extract(&paragraphs);
            Ok(annexure::normalize(&text)?)
        }
        SourceKind::Workbook => Ok(xlsx::read_line_items(&document.data)?),
    }
}
