//! Core library for Maruti Suzuki packing list processing.
//!
//! This crate provides:
//! - Paragraph extraction from `.docx` annexure documents
//! - Annexure text table parsing and record normalization
//! - Excel workbook export and readback
//! - Batch consolidation with per-document error isolation

pub mod error;
pub mod models;
pub mod docx;
pub mod annexure;
pub mod xlsx;
pub mod batch;

pub use error::{PacklistError, Result};
pub use models::config::{Brand, ConsolidationOptions, ContainerType};
pub use models::record::{LineItem, OrderLine};
pub use docx::read_paragraphs;
pub use annexure::{RawTable, extract, normalize, normalize_basic};
pub use xlsx::{read_line_items, write_consolidated, write_line_items, write_order_lines};
pub use batch::{
    Consolidation, DocumentFailure, SourceDocument, SourceKind, consolidate, process_document,
};
