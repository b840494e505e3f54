//! Annexure table extraction and normalization.
//!
//! The invoice cum packing list annexure is a fixed pipe-delimited table
//! embedded in the paragraphs of a Word document, fenced by sentinel lines
//! and interleaved with letterhead noise. This module locates the table,
//! parses it, reassembles records that wrapped onto continuation lines, and
//! produces typed line items.

mod extract;
pub mod fields;
mod normalize;
mod table;

pub use extract::extract;
pub use normalize::{normalize, normalize_basic};
pub use table::RawTable;
