//! Excel workbook output and readback.

mod read;
mod write;

pub use read::read_line_items;
pub use write::{write_consolidated, write_line_items, write_order_lines};
