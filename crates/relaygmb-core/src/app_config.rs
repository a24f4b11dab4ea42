use std::path::PathBuf;

/// Process-level configuration, read once at startup.
///
/// Per-run values (description, category, SEO flags) live in
/// [`crate::GlobalSettings`] and [`crate::SeoOptions`]; the fields here only
/// provide their defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Directory generated spreadsheets are written into.
    pub output_dir: PathBuf,
    pub default_category: String,
    /// Value written to `Pays/Région` for every converted row.
    pub default_country: String,
    pub default_seo_template: String,
    /// Optional YAML run profile applied before CLI overrides.
    pub profile_path: Option<PathBuf>,
}
