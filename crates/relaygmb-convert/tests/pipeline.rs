//! End-to-end conversion over in-memory rows: map, dedupe against an
//! existing export, template names, strip accents.

use relaygmb_convert::{
    map_records, optimize_names, partition_new_listings, strip_accents_from_records,
};
use relaygmb_core::schema::source;
use relaygmb_core::{DestinationColumn, GlobalSettings, SeoOptions, SourceRecord, TimeSlot, Weekday};

fn courier_row(relay: &str, city: &str, postal: &str) -> SourceRecord {
    let mut row = SourceRecord::new();
    row.insert(source::TOUCHPOINT_ID, format!("TP-{relay}"));
    row.insert(source::RELAY_ID, relay);
    row.insert(source::BRAND, "Locker Mondial Relay");
    row.insert(source::ADDRESS_1, "Centre commercial");
    row.insert(source::ADDRESS_3, "Parking niveau 0");
    row.insert(source::CITY, city);
    row.insert(source::POSTAL_CODE, postal);
    row.insert(source::LATITUDE, "45.764");
    row.insert(source::LONGITUDE, "4.8357");
    row.insert(source::PHONE, "");
    for day in Weekday::ALL {
        row.insert(day.source_column(TimeSlot::FirstStart), 0.0);
        row.insert(day.source_column(TimeSlot::FirstEnd), 1.0);
    }
    row
}

fn settings() -> GlobalSettings {
    GlobalSettings::new("Retrait 24h/24 et 7j/7", "Consigne automatique")
}

#[test]
fn mapped_rows_serialize_with_every_import_column() {
    let records = map_records(&[courier_row("069001", "Lyon", "69001")], &settings());
    let json = serde_json::to_value(&records[0]).expect("serialize record");
    let object = json.as_object().expect("record is an object");

    assert_eq!(object.len(), DestinationColumn::ALL.len());
    for column in DestinationColumn::ALL {
        assert!(object.contains_key(column.header()), "missing {}", column.header());
    }
    assert_eq!(object["Code de magasin"], "069001");
    assert_eq!(object["Horaires le dimanche"], "00:00-24:00");
    assert_eq!(object["Ligne d'adresse\u{a0}2"], "Parking niveau 0");
}

#[test]
fn update_flow_keeps_only_new_store_codes() {
    let existing = map_records(&[courier_row("R 100", "Lyon", "69001")], &settings());
    let generated = map_records(
        &[
            courier_row("r100", "Lyon", "69001"),
            courier_row("R200", "Villeurbanne", "69100"),
        ],
        &settings(),
    );

    let outcome = partition_new_listings(&existing, generated);
    assert_eq!(outcome.addition_count(), 1);
    assert_eq!(outcome.duplicate_count, 1);
    assert_eq!(outcome.additions[0].store_code, "R200");
}

#[test]
fn seo_then_accent_stripping() {
    let records = map_records(&[courier_row("R300", "Saint-Étienne", "42000")], &settings());
    let options = SeoOptions {
        template: "Locker {Ville} {CP}".to_string(),
        include_street: false,
        ..SeoOptions::default()
    };
    let mut named = optimize_names(&records, &options);
    assert_eq!(named[0].business_name, "Locker Saint-étienne 42000");

    strip_accents_from_records(&mut named);
    assert_eq!(named[0].business_name, "Locker Saint-etienne 42000");
    assert_eq!(named[0].locality, "Saint-Etienne");
    assert_eq!(named[0].from_the_business, "Retrait 24h/24 et 7j/7");
}
