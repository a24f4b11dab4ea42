use super::*;

fn header() -> Vec<String> {
    let mut cols: Vec<String> = source::REQUIRED_COLUMNS
        .iter()
        .map(ToString::to_string)
        .collect();
    cols.push(source::RELAY_ID.to_string());
    cols
}

fn row(touchpoint: &str, relay: &str) -> Vec<CellValue> {
    vec![
        CellValue::from(touchpoint),
        CellValue::from("Locker Gare"),
        CellValue::from("1 rue de la Gare"),
        CellValue::from("Lille"),
        CellValue::Number(59000.0),
        CellValue::from("Nord"),
        CellValue::Number(50.6365),
        CellValue::Number(3.0635),
        CellValue::Empty,
        CellValue::from(relay),
    ]
}

// -----------------------------------------------------------------------
// header validation
// -----------------------------------------------------------------------

#[test]
fn missing_required_columns_are_all_reported() {
    let header: Vec<String> = header()
        .into_iter()
        .filter(|h| h != source::LATITUDE && h != source::PHONE)
        .collect();
    let err = records_from_rows(&header, &[row("TP1", "R1")]).unwrap_err();
    match err {
        SheetError::MissingColumns(cols) => {
            assert_eq!(cols, [source::LATITUDE, source::PHONE]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_columns_message_lists_names() {
    let err = SheetError::MissingColumns(vec!["Ville".into(), "Latitude".into()]);
    assert_eq!(err.to_string(), "missing required columns: Ville, Latitude");
}

// -----------------------------------------------------------------------
// row filtering
// -----------------------------------------------------------------------

#[test]
fn rows_become_keyed_records() {
    let records = records_from_rows(&header(), &[row("TP1", "R1")]).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.text(source::TOUCHPOINT_ID), "TP1");
    assert_eq!(record.text(source::RELAY_ID), "R1");
    assert_eq!(record.text(source::POSTAL_CODE), "59000");
    assert_eq!(record.get(source::LATITUDE), &CellValue::Number(50.6365));
}

#[test]
fn blank_rows_and_rows_without_touchpoint_are_skipped() {
    let rows = vec![
        row("TP1", "R1"),
        vec![CellValue::Empty; 10],
        vec![],
        row("", "R3"),
        row("TP4", "R4"),
    ];
    let records = records_from_rows(&header(), &rows).unwrap();
    let ids: Vec<_> = records
        .iter()
        .map(|r| r.text(source::TOUCHPOINT_ID).into_owned())
        .collect();
    assert_eq!(ids, ["TP1", "TP4"]);
}

#[test]
fn short_rows_are_padded_with_empty_cells() {
    let records = records_from_rows(&header(), &[vec![CellValue::from("TP1")]]).unwrap();
    assert!(records[0].get(source::CITY).is_blank());
    assert!(records[0].get(source::RELAY_ID).is_blank());
}

#[test]
fn blank_header_columns_are_dropped() {
    let mut header = header();
    header.push(String::new());
    let mut data = row("TP1", "R1");
    data.push(CellValue::from("stray"));
    let records = records_from_rows(&header, &[data]).unwrap();
    assert_eq!(records[0].len(), 10);
}

#[test]
fn no_surviving_rows_is_an_error() {
    let err = records_from_rows(&header(), &[row("", "R1")]).unwrap_err();
    assert!(matches!(err, SheetError::NoValidRows));
}
