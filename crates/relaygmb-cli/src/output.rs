use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use relaygmb_core::{AppConfig, DestinationRecord};
use relaygmb_sheet::{export_path, write_listings, ExportKind};

/// Writes `records` to a fresh timestamped file and returns its path.
///
/// The directory is `--output-dir` when given, else `RELAYGMB_OUTPUT_DIR`.
pub(crate) fn write_export(
    config: &AppConfig,
    output_dir: Option<&Path>,
    kind: ExportKind,
    records: &[DestinationRecord],
) -> anyhow::Result<PathBuf> {
    let dir = output_dir.unwrap_or(&config.output_dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = export_path(dir, kind, Utc::now());
    write_listings(records, &path)?;
    Ok(path)
}
