//! GMB bulk-import files: reading an existing export and writing new ones.

use std::path::Path;

use relaygmb_core::{CellValue, DestinationColumn, DestinationRecord};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::error::SheetError;
use crate::workbook::{header_names, read_first_sheet};

pub const SHEET_NAME: &str = "Import GMB";
const COLUMN_WIDTH: f64 = 20.0;

/// Reads listings from a file laid out in the GMB import schema.
///
/// Columns are matched by header; unknown ones are ignored and missing ones
/// stay blank. Rows without a `Code de magasin` are skipped.
///
/// # Errors
///
/// Returns [`SheetError`] when the file cannot be opened or has fewer than
/// two rows.
pub fn read_listings(path: &Path) -> Result<Vec<DestinationRecord>, SheetError> {
    let rows = read_first_sheet(path)?;
    let Some((header, data)) = rows.split_first() else {
        return Err(SheetError::Empty);
    };
    if data.is_empty() {
        return Err(SheetError::Empty);
    }

    let records = listings_from_rows(&header_names(header), data);
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "read existing listings"
    );
    Ok(records)
}

/// Builds listings from a header row and data rows.
#[must_use]
pub fn listings_from_rows(header: &[String], rows: &[Vec<CellValue>]) -> Vec<DestinationRecord> {
    let columns: Vec<Option<DestinationColumn>> = header
        .iter()
        .map(|name| DestinationColumn::from_header(name))
        .collect();

    if !columns.contains(&Some(DestinationColumn::StoreCode)) {
        tracing::warn!("listings file has no store-code column; every row will be skipped");
    }

    rows.iter()
        .filter_map(|row| {
            let mut record = DestinationRecord::default();
            for (column, cell) in columns.iter().zip(row) {
                if let Some(column) = column {
                    record.set_cell(*column, cell);
                }
            }
            (!record.store_code.trim().is_empty()).then_some(record)
        })
        .collect()
}

/// Writes listings as a single `Import GMB` worksheet with the full template
/// header.
///
/// Coordinates are written as numbers, except `0` which is left blank; blank
/// text fields are left empty.
///
/// # Errors
///
/// Returns [`SheetError::Write`] if the workbook cannot be built or saved.
pub fn write_listings(records: &[DestinationRecord], path: &Path) -> Result<(), SheetError> {
    let write_err = |source| SheetError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    fill_worksheet(workbook.add_worksheet(), records).map_err(write_err)?;
    workbook.save(path).map_err(write_err)?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote listings");
    Ok(())
}

fn fill_worksheet(sheet: &mut Worksheet, records: &[DestinationRecord]) -> Result<(), XlsxError> {
    sheet.set_name(SHEET_NAME)?;

    for (col, column) in (0u16..).zip(DestinationColumn::ALL) {
        sheet.write_string(0, col, column.header())?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (row, record) in (1u32..).zip(records) {
        for (col, column) in (0u16..).zip(DestinationColumn::ALL) {
            if let Some(value) = record.number(column) {
                if value != 0.0 {
                    sheet.write_number(row, col, value)?;
                }
            } else if let Some(text) = record.text(column) {
                if !text.is_empty() {
                    sheet.write_string(row, col, text)?;
                }
            }
        }
    }
    Ok(())
}
