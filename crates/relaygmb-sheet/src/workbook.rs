//! First-worksheet loading shared by both readers.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use relaygmb_core::CellValue;

use crate::error::SheetError;

/// Reads every row of the first worksheet as [`CellValue`]s.
///
/// Accepts any format calamine can auto-detect (`.xlsx`, `.xls`, `.ods`).
pub(crate) fn read_first_sheet(path: &Path) -> Result<Vec<Vec<CellValue>>, SheetError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| SheetError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetError::NoSheets {
            path: path.display().to_string(),
        })?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| SheetError::Read {
            sheet: sheet.clone(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = range.height(),
        "loaded worksheet"
    );

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect())
}

/// Converts one spreadsheet cell.
///
/// Booleans become text and date/time cells become their serial number, so
/// time-only cells arrive as a fraction of a day.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if s.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
    }
}

/// Header cells as trimmed column names.
pub(crate) fn header_names(header: &[CellValue]) -> Vec<String> {
    header
        .iter()
        .map(|cell| cell.as_text().trim().to_string())
        .collect()
}
