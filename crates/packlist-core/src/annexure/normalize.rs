//! Reconciling raw annexure rows into typed records.

use tracing::debug;

use crate::error::ParseError;
use crate::models::record::{LineItem, OrderLine};

use super::fields::{continuation_fragment, order_number, pad_item_code, parse_amount};
use super::table::RawTable;

/// Sub-header phrase repeated inside the table body at page breaks.
const SUB_HEADER: &str = "ORDER ITEM CODE";

/// Cleaned continuation fragments longer than this are wrapped item codes;
/// anything shorter is a genuine box number or range.
const FRAGMENT_MIN_LEN: usize = 6;

const UNIT_OF_MEASURE: &str = "UN";

/// True when an item-code cell holds actual data rather than a repeated
/// header or sub-header artifact.
fn is_data_row(item_code: &str) -> bool {
    !item_code.is_empty() && item_code != "ITEM CODE" && !item_code.contains(SUB_HEADER)
}

/// Normalize extracted annexure text into the four-column order projection.
///
/// This is the legacy shallow variant: no continuation merge, no numeric
/// carry-through beyond quantity and unit rate.
pub fn normalize_basic(text: &str) -> Result<Vec<OrderLine>, ParseError> {
    let table = RawTable::parse(text)?;
    let item = table.require("ITEM CODE")?;
    let order_ref = table.require("ORDER REF NO")?;
    let qty = table.require("QTY")?;
    let rate = table.require("UNIT RATE")?;

    let mut lines = Vec::new();
    for row in table.rows() {
        if !is_data_row(&row[item]) {
            continue;
        }
        lines.push(OrderLine {
            order_number: order_number(&row[order_ref]),
            requested_material: pad_item_code(&row[item]),
            quantity: parse_amount(&row[qty]),
            unit_rate: parse_amount(&row[rate]),
        });
    }

    debug!("normalized {} order lines", lines.len());
    Ok(lines)
}

/// Normalize extracted annexure text into fully reconciled line items.
///
/// Long dispatched item codes wrap onto a continuation line whose
/// box-number cell carries the full code, parenthesized. The merge is an
/// explicit one-step lookahead: for each row, the next row's cleaned
/// box-number is promoted to this row's item code when it is too long to
/// be a box number. Consumed continuation lines are recognizable afterward
/// by their blank sequence number and dropped.
pub fn normalize(text: &str) -> Result<Vec<LineItem>, ParseError> {
    let table = RawTable::parse(text)?;
    let sno = table.require("SNO")?;
    let order_ref = table.require("ORDER REF NO")?;
    let item = table.require("ITEM CODE")?;
    let box_no = table.require("BOX NO")?;
    let qty = table.require("QTY")?;
    let volume = table.require("VOLUME")?;
    let weight = table.require("WEIGHT")?;
    let rate = table.require("UNIT RATE")?;
    let amount = table.require("AMOUNT")?;

    let mut rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| {
            is_data_row(&row[item]) && !row[box_no].contains(SUB_HEADER) && row[sno] != "SNO"
        })
        .cloned()
        .collect();

    // Requested codes are captured before the merge rewrites item codes.
    let requested: Vec<String> = rows.iter().map(|row| row[item].clone()).collect();

    for i in 0..rows.len().saturating_sub(1) {
        let fragment = continuation_fragment(&rows[i + 1][box_no]);
        if fragment.chars().count() > FRAGMENT_MIN_LEN {
            rows[i][item] = fragment;
        }
    }

    let mut items = Vec::new();
    for (row, requested) in rows.iter().zip(&requested) {
        if row[sno].is_empty() {
            // A consumed continuation line.
            continue;
        }
        let quantity = parse_amount(&row[qty]);
        items.push(LineItem {
            order_number: order_number(&row[order_ref]),
            requested_material: pad_item_code(requested),
            dispatched_material: pad_item_code(&row[item]),
            quantity,
            invoiced_quantity: quantity,
            invoiced_unit_value: parse_amount(&row[rate]),
            unit_of_measure: UNIT_OF_MEASURE.to_string(),
            volume: parse_amount(&row[volume]),
            weight: parse_amount(&row[weight]),
            amount: parse_amount(&row[amount]),
        });
    }

    debug!("normalized {} line items", items.len());
    Ok(items)
}
