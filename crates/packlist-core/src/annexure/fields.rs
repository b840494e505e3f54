//! Field-level rules of the annexure layout.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Item codes shorter than this are truncated in the source layout.
const CANONICAL_CODE_LEN: usize = 14;

/// Suffix restoring a truncated item code to its canonical form.
const CODE_PAD_SUFFIX: &str = "-000";

/// Prefix and year suffix forming the purchase order number.
const ORDER_PREFIX: &str = "CHL";
const ORDER_SUFFIX: &str = "-24";

/// Restore a truncated item code to the canonical 14-character form.
///
/// The layout drops the `-000` variant suffix from codes that fill their
/// cell; anything shorter than 14 characters gets it back. Codes already
/// at canonical length pass through untouched.
pub fn pad_item_code(code: &str) -> String {
    if code.chars().count() < CANONICAL_CODE_LEN {
        format!("{code}{CODE_PAD_SUFFIX}")
    } else {
        code.to_string()
    }
}

/// Derive the purchase order number from a raw order reference.
pub fn order_number(order_ref: &str) -> String {
    format!("{ORDER_PREFIX}{order_ref}{ORDER_SUFFIX}")
}

/// Coerce a cell to a decimal amount.
///
/// Grouping commas are stripped before parsing. Anything that still fails
/// to parse, including an empty cell, is an explicit missing value rather
/// than an error or a zero.
pub fn parse_amount(cell: &str) -> Option<Decimal> {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Clean a box-number cell for the continuation merge.
///
/// Wrapped item codes arrive parenthesized and space-broken in the
/// box-number column of the continuation line; only those characters are
/// removed, everything else is preserved verbatim.
pub fn continuation_fragment(box_no: &str) -> String {
    box_no
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')'))
        .collect()
}
