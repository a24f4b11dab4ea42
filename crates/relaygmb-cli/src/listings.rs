//! Commands that post-process existing listings files: `update`, `seo`,
//! `strip-accents`.

use std::path::Path;

use anyhow::Context;
use relaygmb_convert::{optimize_names, partition_new_listings, strip_accents_from_records};
use relaygmb_core::{AppConfig, DestinationRecord};
use relaygmb_sheet::{read_listings, ExportKind};

use crate::output::write_export;
use crate::resolve::{load_run_profile, resolve_seo_options};
use crate::SeoArgs;

fn read(path: &Path) -> anyhow::Result<Vec<DestinationRecord>> {
    read_listings(path).with_context(|| format!("failed to read listings {}", path.display()))
}

/// Writes only the generated listings that are not already in `existing`.
///
/// Nothing is written when every generated store code is already known.
pub(crate) fn run_update(
    config: &AppConfig,
    existing: &Path,
    generated: &Path,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let current = read(existing)?;
    let fresh = read(generated)?;

    let outcome = partition_new_listings(&current, fresh);
    println!(
        "{} new locations identified, {} duplicates skipped",
        outcome.addition_count(),
        outcome.duplicate_count
    );

    if !outcome.has_additions() {
        println!("no new locations found");
        return Ok(());
    }

    let path = write_export(
        config,
        output_dir,
        ExportKind::UpdateOnly,
        &outcome.additions,
    )?;
    println!("written to {}", path.display());
    Ok(())
}

pub(crate) fn run_seo(config: &AppConfig, args: &SeoArgs) -> anyhow::Result<()> {
    let profile = load_run_profile(args.profile.as_deref(), config)?;
    let options = resolve_seo_options(config, profile.as_ref(), args);
    tracing::debug!(template = %options.template, "rewriting listing names");

    let records = read(&args.input)?;
    let mut optimized = optimize_names(&records, &options);
    if args.strip_accents {
        strip_accents_from_records(&mut optimized);
    }

    let path = write_export(
        config,
        args.output_dir.as_deref(),
        ExportKind::SeoOptimized,
        &optimized,
    )?;
    println!("{} listings renamed, written to {}", optimized.len(), path.display());
    Ok(())
}

pub(crate) fn run_strip_accents(
    config: &AppConfig,
    input: &Path,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let mut records = read(input)?;
    strip_accents_from_records(&mut records);

    let path = write_export(config, output_dir, ExportKind::SansAccents, &records)?;
    println!("{} listings cleaned, written to {}", records.len(), path.display());
    Ok(())
}
