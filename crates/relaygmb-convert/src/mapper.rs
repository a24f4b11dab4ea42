//! Courier export rows → GMB bulk-import rows.
//!
//! Mapping never fails: a malformed cell degrades to `0` or `""` so that N
//! input rows always produce N output rows, in the same order.

use relaygmb_core::schema::source;
use relaygmb_core::{
    CellValue, DestinationColumn, DestinationRecord, GlobalSettings, SourceRecord, TimeSlot,
    Weekday,
};

use crate::schedule::{build_day_schedule, DayTimes};

/// Maps every source row with the same run settings.
#[must_use]
pub fn map_records(sources: &[SourceRecord], settings: &GlobalSettings) -> Vec<DestinationRecord> {
    let records: Vec<DestinationRecord> = sources
        .iter()
        .map(|row| map_record(row, settings))
        .collect();
    tracing::debug!(rows = records.len(), "mapped courier rows to listings");
    records
}

/// Maps one courier row to one listing row.
#[must_use]
pub fn map_record(row: &SourceRecord, settings: &GlobalSettings) -> DestinationRecord {
    let mut record = DestinationRecord {
        store_code: store_code(row),
        business_name: row.text(source::BRAND).into_owned(),
        locality: row.text(source::CITY).into_owned(),
        postal_code: row.text(source::POSTAL_CODE).into_owned(),
        country_region: settings.country.clone(),
        primary_phone: row.text(source::PHONE).into_owned(),
        primary_category: settings.category.clone(),
        from_the_business: settings.description.clone(),
        ..DestinationRecord::default()
    };

    for (column, line) in DestinationColumn::ADDRESS_LINES
        .into_iter()
        .zip(compact_address(row))
    {
        if let Some(slot) = record.text_mut(column) {
            *slot = line;
        }
    }

    record.latitude = coordinate(row, source::LATITUDE, &record.store_code);
    record.longitude = coordinate(row, source::LONGITUDE, &record.store_code);

    for day in Weekday::ALL {
        let token = day_token(row, day);
        if let Some(slot) = record.text_mut(day.hours_column()) {
            *slot = token;
        }
    }

    record
}

/// Store code from `Numéro Relais`, or `Numéro TouchPoint` when that is blank.
fn store_code(row: &SourceRecord) -> String {
    let relay = row.get(source::RELAY_ID);
    if relay.is_blank() {
        row.text(source::TOUCHPOINT_ID).into_owned()
    } else {
        relay.as_text().into_owned()
    }
}

/// Non-blank address fragments in source order, at most five.
fn compact_address(row: &SourceRecord) -> Vec<String> {
    source::ADDRESS_FRAGMENTS
        .iter()
        .map(|column| row.get(column))
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.as_text().into_owned())
        .take(DestinationColumn::ADDRESS_LINES.len())
        .collect()
}

fn coordinate(row: &SourceRecord, column: &str, store_code: &str) -> f64 {
    let cell = row.get(column);
    if let Some(value) = cell.as_number() {
        return value;
    }
    if cell.is_blank() {
        tracing::debug!(store_code, column, "coordinate missing; defaulting to 0");
    } else {
        tracing::warn!(
            store_code,
            column,
            raw = %cell.as_text(),
            "unparseable coordinate; defaulting to 0"
        );
    }
    0.0
}

fn day_token(row: &SourceRecord, day: Weekday) -> String {
    let first_start = row.get(&day.source_column(TimeSlot::FirstStart));
    let first_end = row.get(&day.source_column(TimeSlot::FirstEnd));
    let second_start = row.get(&day.source_column(TimeSlot::SecondStart));
    let second_end = row.get(&day.source_column(TimeSlot::SecondEnd));

    let first_end = tuesday_first_end_fallback(day, first_end, second_end);

    build_day_schedule(DayTimes {
        first_start,
        first_end,
        second_start,
        second_end,
    })
    .to_string()
}

/// Tuesday's first-period end is read from the second-period end column when
/// blank.
///
/// Seen in one export variant; other days never fall back.
fn tuesday_first_end_fallback<'a>(
    day: Weekday,
    first_end: &'a CellValue,
    second_end: &'a CellValue,
) -> &'a CellValue {
    if day == Weekday::Tuesday && first_end.is_blank() && !second_end.is_blank() {
        tracing::debug!("tuesday first-period end blank; using second-period end");
        second_end
    } else {
        first_end
    }
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod tests;
