//! Merges run values from CLI flags, the YAML profile and `AppConfig`.
//!
//! Precedence is flag, then profile, then config default.

use std::path::Path;

use anyhow::{bail, Context};
use relaygmb_core::{AppConfig, GlobalSettings, RunProfile, SeoOptions};

use crate::SeoArgs;

/// Loads the profile named by `--profile`, else `RELAYGMB_PROFILE_PATH`.
pub(crate) fn load_run_profile(
    flag: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Option<RunProfile>> {
    let Some(path) = flag.or(config.profile_path.as_deref()) else {
        return Ok(None);
    };
    let profile = relaygmb_core::load_profile(path)
        .with_context(|| format!("failed to load run profile {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded run profile");
    Ok(Some(profile))
}

/// Builds the settings applied to every converted row.
///
/// # Errors
///
/// Fails when no non-blank description is available.
pub(crate) fn resolve_settings(
    config: &AppConfig,
    profile: Option<&RunProfile>,
    description: Option<&str>,
    category: Option<&str>,
) -> anyhow::Result<GlobalSettings> {
    let description = description
        .map(str::to_string)
        .or_else(|| profile.and_then(|p| p.description.clone()))
        .unwrap_or_default();
    if description.trim().is_empty() {
        bail!("a business description is required (--description or profile `description`)");
    }

    let category = category
        .map(str::to_string)
        .or_else(|| profile.and_then(|p| p.category.clone()))
        .unwrap_or_else(|| config.default_category.clone());
    if category.trim().is_empty() {
        bail!("category must not be blank");
    }

    let country = profile
        .and_then(|p| p.country.clone())
        .unwrap_or_else(|| config.default_country.clone());

    Ok(GlobalSettings {
        description,
        category,
        country,
    })
}

/// Name-template options: profile block (or config template with every flag
/// on), then `--template` and the `--no-*`/`--keep-special` switches.
pub(crate) fn resolve_seo_options(
    config: &AppConfig,
    profile: Option<&RunProfile>,
    args: &SeoArgs,
) -> SeoOptions {
    let mut options = profile
        .and_then(|p| p.seo.clone())
        .unwrap_or_else(|| SeoOptions {
            template: config.default_seo_template.clone(),
            ..SeoOptions::default()
        });

    if let Some(template) = &args.template {
        options.template.clone_from(template);
    }
    if args.no_city {
        options.include_city = false;
    }
    if args.no_postal_code {
        options.include_postal_code = false;
    }
    if args.no_street {
        options.include_street = false;
    }
    if args.keep_special {
        options.remove_special = false;
    }
    if args.no_capitalize {
        options.capitalize = false;
    }
    options
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
