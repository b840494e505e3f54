//! Workbook export for normalized records.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::error::WorkbookError;
use crate::models::config::ConsolidationOptions;
use crate::models::record::{LineItem, OrderLine};

/// Sheet name used for per-document exports.
const DOCUMENT_SHEET: &str = "Packing List";

/// Sheet name used for the consolidated export.
const CONSOLIDATED_SHEET: &str = "Datos Combinados";

/// Headers of the constant columns appended to the consolidated sheet.
const EXTRA_COLUMNS: [&str; 3] = ["DT", "Tipo de Contenedor", "Contenedor"];

/// Serialize full records to workbook bytes.
///
/// Row 0 carries the document title, row 1 the column headers, and data
/// starts on row 2. That layout is what [`read_line_items`] and the
/// downstream consolidation flow expect.
///
/// [`read_line_items`]: crate::xlsx::read_line_items
pub fn write_line_items(items: &[LineItem], title: &str) -> Result<Vec<u8>, WorkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(DOCUMENT_SHEET)?;

    sheet.write_string(0, 0, title)?;
    write_headers(sheet, 1, &LineItem::COLUMNS)?;
    for (i, item) in items.iter().enumerate() {
        write_record(sheet, i as u32 + 2, item)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serialize four-column order lines to workbook bytes.
///
/// Same layout as [`write_line_items`]: title row, header row, data rows.
pub fn write_order_lines(lines: &[OrderLine], title: &str) -> Result<Vec<u8>, WorkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(DOCUMENT_SHEET)?;

    sheet.write_string(0, 0, title)?;
    write_headers(sheet, 1, &OrderLine::COLUMNS)?;
    for (i, line) in lines.iter().enumerate() {
        let row = i as u32 + 2;
        sheet.write_string(row, 0, &line.order_number)?;
        sheet.write_string(row, 1, &line.requested_material)?;
        write_amount(sheet, row, 2, line.quantity)?;
        write_amount(sheet, row, 3, line.unit_rate)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serialize consolidated records to workbook bytes.
///
/// The sheet has no title row: headers sit on row 0, data on row 1
/// onwards. Every data row carries the record columns followed by the
/// three constant columns taken from `options`.
pub fn write_consolidated(
    records: &[LineItem],
    options: &ConsolidationOptions,
) -> Result<Vec<u8>, WorkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(CONSOLIDATED_SHEET)?;

    let mut headers: Vec<&str> = LineItem::COLUMNS.to_vec();
    headers.extend(EXTRA_COLUMNS);
    write_headers(sheet, 0, &headers)?;

    let container_type = options.container_type.to_string();
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        write_record(sheet, row, record)?;
        sheet.write_string(row, 7, &options.label)?;
        sheet.write_string(row, 8, &container_type)?;
        sheet.write_string(row, 9, &options.container_id)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_headers(sheet: &mut Worksheet, row: u32, headers: &[&str]) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(row, col as u16, *header)?;
    }
    Ok(())
}

fn write_record(sheet: &mut Worksheet, row: u32, item: &LineItem) -> Result<(), XlsxError> {
    sheet.write_string(row, 0, &item.order_number)?;
    sheet.write_string(row, 1, &item.requested_material)?;
    sheet.write_string(row, 2, &item.dispatched_material)?;
    write_amount(sheet, row, 3, item.quantity)?;
    write_amount(sheet, row, 4, item.invoiced_quantity)?;
    write_amount(sheet, row, 5, item.invoiced_unit_value)?;
    sheet.write_string(row, 6, &item.unit_of_measure)?;
    Ok(())
}

/// Write an optional amount as a number cell, leaving the cell blank
/// when there is no value.
fn write_amount(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    amount: Option<Decimal>,
) -> Result<(), XlsxError> {
    if let Some(number) = amount.and_then(|a| a.to_f64()) {
        sheet.write_number(row, col, number)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    use calamine::{Data, Reader, Xlsx};

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn cell(bytes: &[u8], sheet: &str, row: u32, col: u32) -> Data {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec())).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range.get_value((row, col)).cloned().unwrap_or(Data::Empty)
    }

    fn sample_record() -> LineItem {
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
        }
    }

    #[test]
    fn test_document_layout_has_title_then_headers() {
        let bytes = write_line_items(&[sample_record()], "Maruti Suzuki").unwrap();

        assert_eq!(
            cell(&bytes, "Packing List", 0, 0),
            Data::String("Maruti Suzuki".to_string())
        );
        assert_eq!(
            cell(&bytes, "Packing List", 1, 0),
            Data::String(LineItem::COLUMNS[0].to_string())
        );
        assert_eq!(
            cell(&bytes, "Packing List", 2, 0),
            Data::String("CHL70023954-24".to_string())
        );
        assert_eq!(cell(&bytes, "Packing List", 2, 3), Data::Float(450.0));
    }

    #[test]
    fn test_missing_amounts_leave_blank_cells() {
        let mut record = sample_record();
        record.quantity = None;
        let bytes = write_line_items(&[record], "Maruti Suzuki").unwrap();

        assert_eq!(cell(&bytes, "Packing List", 2, 3), Data::Empty);
    }

    #[test]
    fn test_consolidated_headers_and_constants() {
        let options = ConsolidationOptions::default();
        let bytes = write_consolidated(&[sample_record()], &options).unwrap();

        assert_eq!(
            cell(&bytes, "Datos Combinados", 0, 0),
            Data::String(LineItem::COLUMNS[0].to_string())
        );
        assert_eq!(
            cell(&bytes, "Datos Combinados", 0, 7),
            Data::String("DT".to_string())
        );
        assert_eq!(
            cell(&bytes, "Datos Combinados", 0, 8),
            Data::String("Tipo de Contenedor".to_string())
        );
        assert_eq!(
            cell(&bytes, "Datos Combinados", 0, 9),
            Data::String("Contenedor".to_string())
        );

        assert_eq!(
            cell(&bytes, "Datos Combinados", 1, 7),
            Data::String("Numero de DT".to_string())
        );
        assert_eq!(
            cell(&bytes, "Datos Combinados", 1, 8),
            Data::String("40HC".to_string())
        );
        assert_eq!(
            cell(&bytes, "Datos Combinados", 1, 9),
            Data::String("Contenedor por defecto".to_string())
        );
    }

    #[test]
    fn test_consolidated_with_no_records_still_has_headers() {
        let options = ConsolidationOptions::default();
        let bytes = write_consolidated(&[], &options).unwrap();

        assert_eq!(
            cell(&bytes, "Datos Combinados", 0, 6),
            Data::String(LineItem::COLUMNS[6].to_string())
        );
        assert_eq!(cell(&bytes, "Datos Combinados", 1, 0), Data::Empty);
    }

    #[test]
    fn test_order_line_export_uses_short_schema() {
        let lines = vec![OrderLine {
            order_number: "CHL70023954-24".to_string(),
            requested_material: "91111M66R-000".to_string(),
            quantity: Some(decimal("450")),
            unit_rate: Some(decimal("6.40")),
        }];
        let bytes = write_order_lines(&lines, "Maruti Suzuki").unwrap();

        assert_eq!(
            cell(&bytes, "Packing List", 1, 0),
            Data::String("NRO_ORDEN_PREFIJO".to_string())
        );
        assert_eq!(
            cell(&bytes, "Packing List", 1, 3),
            Data::String("UNIT RATE".to_string())
        );
        assert_eq!(cell(&bytes, "Packing List", 2, 2), Data::Float(450.0));
    }
}
