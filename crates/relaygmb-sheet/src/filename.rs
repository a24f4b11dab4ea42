//! Timestamped export file names.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Which command produced an export; decides the file-name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Import,
    UpdateOnly,
    SeoOptimized,
    SansAccents,
}

impl ExportKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            ExportKind::Import => "Import_GMB",
            ExportKind::UpdateOnly => "gmb_update_only",
            ExportKind::SeoOptimized => "gmb_seo_optimized",
            ExportKind::SansAccents => "gmb_sans_accents",
        }
    }
}

/// `{prefix}_{YYYY-MM-DDTHH-MM-SS}.xlsx`, in UTC.
#[must_use]
pub fn export_file_name(kind: ExportKind, at: DateTime<Utc>) -> String {
    format!("{}_{}.xlsx", kind.prefix(), at.format("%Y-%m-%dT%H-%M-%S"))
}

#[must_use]
pub fn export_path(dir: &Path, kind: ExportKind, at: DateTime<Utc>) -> PathBuf {
    dir.join(export_file_name(kind, at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap()
    }

    #[test]
    fn import_name_uses_dashed_timestamp() {
        assert_eq!(
            export_file_name(ExportKind::Import, at()),
            "Import_GMB_2024-03-09T07-05-42.xlsx"
        );
    }

    #[test]
    fn every_kind_has_its_prefix() {
        assert_eq!(
            export_file_name(ExportKind::UpdateOnly, at()),
            "gmb_update_only_2024-03-09T07-05-42.xlsx"
        );
        assert_eq!(
            export_file_name(ExportKind::SeoOptimized, at()),
            "gmb_seo_optimized_2024-03-09T07-05-42.xlsx"
        );
        assert_eq!(
            export_file_name(ExportKind::SansAccents, at()),
            "gmb_sans_accents_2024-03-09T07-05-42.xlsx"
        );
    }

    #[test]
    fn path_joins_output_dir() {
        let path = export_path(Path::new("out"), ExportKind::Import, at());
        assert_eq!(path, Path::new("out/Import_GMB_2024-03-09T07-05-42.xlsx"));
    }
}
