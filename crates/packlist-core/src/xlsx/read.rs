//! Reading previously exported workbooks back into records.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::annexure::fields::parse_amount;
use crate::error::WorkbookError;
use crate::models::record::LineItem;

/// Read line item records back from a per-document workbook export.
///
/// The first worksheet is used. Row 0 carries the document title and row 1
/// the column headers, so data starts on row 2. Only the exported columns
/// come back: `volume`, `weight` and `amount` are not part of the export
/// and read back as `None`.
pub fn read_line_items(data: &[u8]) -> Result<Vec<LineItem>, WorkbookError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data.to_vec()))?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(WorkbookError::NoSheets);
    };
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    rows.next();
    let Some(header_row) = rows.next() else {
        return Err(WorkbookError::MissingHeader);
    };

    let headers: Vec<String> = header_row.iter().map(cell_text).collect();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| WorkbookError::MissingColumn(name.to_string()))
    };

    let order_number = column(LineItem::COLUMNS[0])?;
    let requested = column(LineItem::COLUMNS[1])?;
    let dispatched = column(LineItem::COLUMNS[2])?;
    let quantity = column(LineItem::COLUMNS[3])?;
    let invoiced_quantity = column(LineItem::COLUMNS[4])?;
    let unit_value = column(LineItem::COLUMNS[5])?;
    let unit_of_measure = column(LineItem::COLUMNS[6])?;

    let mut items = Vec::new();
    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        items.push(LineItem {
            order_number: cell_text(&row[order_number]),
            requested_material: cell_text(&row[requested]),
            dispatched_material: cell_text(&row[dispatched]),
            quantity: cell_amount(&row[quantity]),
            invoiced_quantity: cell_amount(&row[invoiced_quantity]),
            invoiced_unit_value: cell_amount(&row[unit_value]),
            unit_of_measure: cell_text(&row[unit_of_measure]),
            volume: None,
            weight: None,
            amount: None,
        });
    }

    Ok(items)
}

/// Text content of a cell, trimmed. Non-string cells are formatted.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Numeric content of a cell, if any.
fn cell_amount(cell: &Data) -> Option<Decimal> {
    match cell {
        Data::Int(i) => Some(Decimal::from(*i)),
        Data::Float(f) => Decimal::from_f64(*f),
        Data::String(s) => parse_amount(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    use crate::models::record::OrderLine;
    use crate::xlsx::{write_line_items, write_order_lines};

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem {
                order_number: "CHL70023954-24".to_string(),
                requested_material: "91111M66R-000".to_string(),
                dispatched_material: "91111M66R-000".to_string(),
                quantity: Some(decimal("450")),
                invoiced_quantity: Some(decimal("450")),
                invoiced_unit_value: Some(decimal("6.40")),
                unit_of_measure: "UN".to_string(),
                volume: Some(decimal("0.034")),
                weight: Some(decimal("12.5")),
                amount: Some(decimal("2880.00")),
            },
            LineItem {
                order_number: "CHL70023954-24".to_string(),
                requested_material: "84701M55R00-000".to_string(),
                dispatched_material: "84701M55R00-000".to_string(),
                quantity: None,
                invoiced_quantity: None,
                invoiced_unit_value: None,
                unit_of_measure: "UN".to_string(),
                volume: None,
                weight: None,
                amount: None,
            },
        ]
    }

    #[test]
    fn test_round_trips_exported_columns() {
        let bytes = write_line_items(&sample_items(), "Maruti Suzuki").unwrap();
        let items = read_line_items(&bytes).unwrap();

        let mut expected = sample_items();
        for item in &mut expected {
            item.volume = None;
            item.weight = None;
            item.amount = None;
        }
        assert_eq!(items, expected);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let lines = vec![OrderLine {
            order_number: "CHL70023954-24".to_string(),
            requested_material: "91111M66R-000".to_string(),
            quantity: Some(decimal("450")),
            unit_rate: Some(decimal("6.40")),
        }];
        let bytes = write_order_lines(&lines, "Maruti Suzuki").unwrap();

        let err = read_line_items(&bytes).unwrap_err();
        assert!(matches!(err, WorkbookError::MissingColumn(_)));
    }

    #[test]
    fn test_header_row_is_required() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "just a title").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let err = read_line_items(&bytes).unwrap_err();
        assert!(matches!(err, WorkbookError::MissingHeader));
    }

    #[test]
    fn test_rejects_non_workbook_bytes() {
        let err = read_line_items(b"definitely not a workbook").unwrap_err();
        assert!(matches!(err, WorkbookError::Read(_)));
    }
}
