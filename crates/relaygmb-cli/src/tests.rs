use std::path::{Path, PathBuf};

use relaygmb_core::{AppConfig, DestinationRecord};
use relaygmb_sheet::{read_listings, write_listings};

use super::*;

fn config(output_dir: &Path) -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        output_dir: output_dir.to_path_buf(),
        default_category: "Consigne automatique".to_string(),
        default_country: "France".to_string(),
        default_seo_template: "Locker {Ville}".to_string(),
        profile_path: None,
    }
}

fn listing(code: &str, city: &str) -> DestinationRecord {
    DestinationRecord {
        store_code: code.to_string(),
        business_name: "Locker".to_string(),
        locality: city.to_string(),
        postal_code: "69001".to_string(),
        latitude: 45.76,
        longitude: 4.83,
        ..DestinationRecord::default()
    }
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

// -----------------------------------------------------------------------
// argument parsing
// -----------------------------------------------------------------------

#[test]
fn parses_convert_with_defaults() {
    let cli = Cli::try_parse_from(["relaygmb", "convert", "export.xlsx"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Convert(ConvertArgs {
            ref input,
            description: None,
            category: None,
            preview: None,
            dry_run: false,
            ..
        }) if input == Path::new("export.xlsx")
    ));
}

#[test]
fn parses_convert_with_flags() {
    let cli = Cli::try_parse_from([
        "relaygmb",
        "convert",
        "export.xlsx",
        "--description",
        "Consigne 24h/24",
        "--category",
        "Point relais",
        "--preview",
        "3",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Convert(ConvertArgs {
            description: Some(ref d),
            category: Some(ref c),
            preview: Some(3),
            dry_run: true,
            ..
        }) if d == "Consigne 24h/24" && c == "Point relais"
    ));
}

#[test]
fn parses_update_positionals() {
    let cli = Cli::try_parse_from(["relaygmb", "update", "old.xlsx", "new.xlsx"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Update {
            ref existing,
            ref generated,
            output_dir: None,
        } if existing == Path::new("old.xlsx") && generated == Path::new("new.xlsx")
    ));
}

#[test]
fn update_requires_both_files() {
    assert!(Cli::try_parse_from(["relaygmb", "update", "old.xlsx"]).is_err());
}

#[test]
fn parses_seo_switches() {
    let cli = Cli::try_parse_from([
        "relaygmb",
        "seo",
        "listings.xlsx",
        "--template",
        "Locker {Ville}",
        "--no-postal-code",
        "--no-street",
        "--strip-accents",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Seo(SeoArgs {
            template: Some(ref t),
            no_city: false,
            no_postal_code: true,
            no_street: true,
            keep_special: false,
            no_capitalize: false,
            strip_accents: true,
            ..
        }) if t == "Locker {Ville}"
    ));
}

#[test]
fn parses_strip_accents_command() {
    let cli = Cli::try_parse_from([
        "relaygmb",
        "strip-accents",
        "listings.xlsx",
        "--output-dir",
        "out",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::StripAccents {
            output_dir: Some(ref dir),
            ..
        } if dir == Path::new("out")
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["relaygmb"]).is_err());
}

#[test]
fn preview_must_be_a_number() {
    assert!(Cli::try_parse_from(["relaygmb", "convert", "x.xlsx", "--preview", "many"]).is_err());
}

// -----------------------------------------------------------------------
// command handlers
// -----------------------------------------------------------------------

#[test]
fn preview_shows_at_most_the_requested_rows() {
    let records = vec![listing("A1", "Lyon"), listing("A2", "Lyon")];
    let json = convert::preview_json(&records, 1).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["Code de magasin"], "A1");

    let json = convert::preview_json(&records, 10).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn convert_without_description_fails_before_reading_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        input: dir.path().join("absent.xlsx"),
        description: None,
        category: None,
        profile: None,
        output_dir: None,
        preview: None,
        dry_run: true,
    };
    let err = convert::run_convert(&config(dir.path()), &args).unwrap_err();
    assert!(err.to_string().contains("description"));
}

#[test]
fn update_writes_only_new_store_codes() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("existing.xlsx");
    let generated = dir.path().join("generated.xlsx");
    write_listings(&[listing("A 1", "Lyon")], &existing).unwrap();
    write_listings(&[listing("a1", "Lyon"), listing("B2", "Bron")], &generated).unwrap();
    let out = dir.path().join("out");

    listings::run_update(&config(dir.path()), &existing, &generated, Some(out.as_path())).unwrap();

    let written = files_in(&out);
    assert_eq!(written.len(), 1);
    assert!(file_name(&written[0]).starts_with("gmb_update_only_"));
    let records = read_listings(&written[0]).unwrap();
    assert_eq!(records, vec![listing("B2", "Bron")]);
}

#[test]
fn update_with_nothing_new_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("existing.xlsx");
    let generated = dir.path().join("generated.xlsx");
    write_listings(&[listing("A1", "Lyon")], &existing).unwrap();
    write_listings(&[listing("a1", "Lyon")], &generated).unwrap();
    let out = dir.path().join("out");

    listings::run_update(&config(dir.path()), &existing, &generated, Some(out.as_path())).unwrap();

    assert!(!out.exists());
}

#[test]
fn seo_renames_and_strips_accents() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("listings.xlsx");
    write_listings(&[listing("A1", "Besançon")], &input).unwrap();
    let out = dir.path().join("out");
    let args = SeoArgs {
        input,
        template: None,
        no_city: false,
        no_postal_code: true,
        no_street: true,
        keep_special: false,
        no_capitalize: false,
        strip_accents: true,
        profile: None,
        output_dir: Some(out.clone()),
    };

    listings::run_seo(&config(dir.path()), &args).unwrap();

    let written = files_in(&out);
    assert!(file_name(&written[0]).starts_with("gmb_seo_optimized_"));
    let records = read_listings(&written[0]).unwrap();
    assert_eq!(records[0].business_name, "Locker Besancon");
    assert_eq!(records[0].locality, "Besancon");
}

#[test]
fn strip_accents_uses_config_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("listings.xlsx");
    write_listings(&[listing("A1", "Orléans")], &input).unwrap();
    let out = dir.path().join("exports");

    listings::run_strip_accents(&config(&out), &input, None).unwrap();

    let written = files_in(&out);
    assert_eq!(written.len(), 1);
    assert!(file_name(&written[0]).starts_with("gmb_sans_accents_"));
    assert_eq!(read_listings(&written[0]).unwrap()[0].locality, "Orleans");
}
