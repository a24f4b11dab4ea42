//! Courier export ingestion.

use std::path::Path;

use relaygmb_core::schema::source;
use relaygmb_core::{CellValue, SourceRecord};

use crate::error::SheetError;
use crate::workbook::{header_names, read_first_sheet};

/// Reads the first worksheet of a courier export into [`SourceRecord`]s.
///
/// # Errors
///
/// Returns [`SheetError`] when the file cannot be opened, has fewer than two
/// rows, lacks a required column, or has no row with a `Numéro TouchPoint`.
pub fn read_courier_export(path: &Path) -> Result<Vec<SourceRecord>, SheetError> {
    let rows = read_first_sheet(path)?;
    let Some((header, data)) = rows.split_first() else {
        return Err(SheetError::Empty);
    };
    if data.is_empty() {
        return Err(SheetError::Empty);
    }

    let records = records_from_rows(&header_names(header), data)?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "read courier export"
    );
    Ok(records)
}

/// Builds source records from a header row and the data rows below it.
///
/// Entirely blank rows are skipped, as are rows without a `Numéro TouchPoint`.
/// Short rows are padded with empty cells; columns with a blank header are
/// dropped.
///
/// # Errors
///
/// [`SheetError::MissingColumns`] lists every required header that is absent;
/// [`SheetError::NoValidRows`] is returned when nothing survives filtering.
pub fn records_from_rows(
    header: &[String],
    rows: &[Vec<CellValue>],
) -> Result<Vec<SourceRecord>, SheetError> {
    let missing: Vec<String> = source::REQUIRED_COLUMNS
        .iter()
        .filter(|required| !header.iter().any(|h| h == *required))
        .map(|required| (*required).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SheetError::MissingColumns(missing));
    }

    let mut skipped = 0usize;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        if row.iter().all(CellValue::is_blank) {
            continue;
        }

        let record: SourceRecord = header
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(idx, name)| (name.clone(), row.get(idx).cloned().unwrap_or_default()))
            .collect();

        if record.get(source::TOUCHPOINT_ID).is_blank() {
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "dropped rows without a TouchPoint id");
    }
    if records.is_empty() {
        return Err(SheetError::NoValidRows);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
