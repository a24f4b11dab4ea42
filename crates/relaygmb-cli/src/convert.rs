//! `convert`: courier export in, GMB import file out.

use anyhow::Context;
use relaygmb_convert::map_records;
use relaygmb_core::{AppConfig, DestinationRecord};
use relaygmb_sheet::{read_courier_export, ExportKind};

use crate::output::write_export;
use crate::resolve::{load_run_profile, resolve_settings};
use crate::ConvertArgs;

/// Runs a full conversion.
///
/// The description is checked before the export is even opened, so a missing
/// description never costs a file read.
///
/// # Errors
///
/// Returns an error if settings cannot be resolved, the export cannot be
/// read, or the output cannot be written.
pub(crate) fn run_convert(config: &AppConfig, args: &ConvertArgs) -> anyhow::Result<()> {
    let profile = load_run_profile(args.profile.as_deref(), config)?;
    let settings = resolve_settings(
        config,
        profile.as_ref(),
        args.description.as_deref(),
        args.category.as_deref(),
    )?;
    if !settings.is_known_category() {
        tracing::warn!(
            category = %settings.category,
            "category is not one of the usual pickup-point categories"
        );
    }

    let sources = read_courier_export(&args.input)
        .with_context(|| format!("failed to read courier export {}", args.input.display()))?;
    let records = map_records(&sources, &settings);

    if let Some(count) = args.preview {
        println!("{}", preview_json(&records, count)?);
    }

    if args.dry_run {
        println!(
            "dry-run: converted {} locations, nothing written",
            records.len()
        );
        return Ok(());
    }

    let path = write_export(config, args.output_dir.as_deref(), ExportKind::Import, &records)?;
    println!("{} locations written to {}", records.len(), path.display());
    Ok(())
}

/// Pretty JSON for the first `count` records.
pub(crate) fn preview_json(records: &[DestinationRecord], count: usize) -> anyhow::Result<String> {
    let shown = &records[..count.min(records.len())];
    serde_json::to_string_pretty(shown).context("failed to render preview")
}
