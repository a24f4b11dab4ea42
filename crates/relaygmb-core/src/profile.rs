//! YAML run profiles.
//!
//! A profile pins the per-run values an operator would otherwise retype for
//! every export:
//!
//! ```yaml
//! description: "Consigne Mondial Relay accessible 24h/24"
//! category: "Consigne automatique"
//! country: "France"
//! seo:
//!   template: "Locker Mondial Relay 24/7 - {Ville}"
//!   include_postal_code: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::settings::SeoOptions;
use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunProfile {
    pub description: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub seo: Option<SeoOptions>,
}

/// Load and validate a run profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<RunProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile: RunProfile =
        serde_yaml::from_str(&content).map_err(ConfigError::ProfileFileParse)?;

    validate_profile(&profile)?;

    Ok(profile)
}

fn validate_profile(profile: &RunProfile) -> Result<(), ConfigError> {
    if profile
        .category
        .as_deref()
        .is_some_and(|c| c.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "category must be non-empty when set".to_string(),
        ));
    }

    if profile
        .country
        .as_deref()
        .is_some_and(|c| c.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "country must be non-empty when set".to_string(),
        ));
    }

    Ok(())
}
