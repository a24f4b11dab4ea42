use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::settings::{DEFAULT_CATEGORY, DEFAULT_COUNTRY, DEFAULT_SEO_TEMPLATE};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Values that are set but blank are rejected rather than silently
/// replaced, since a blank category or output directory is always a typo.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_blank = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be blank".to_string(),
            });
        }
        Ok(raw)
    };

    let log_level = non_blank("RELAYGMB_LOG_LEVEL", "info")?;
    let output_dir = PathBuf::from(non_blank("RELAYGMB_OUTPUT_DIR", ".")?);
    let default_category = non_blank("RELAYGMB_DEFAULT_CATEGORY", DEFAULT_CATEGORY)?;
    let default_country = non_blank("RELAYGMB_DEFAULT_COUNTRY", DEFAULT_COUNTRY)?;
    // A blank template is legal: the optimizer treats it as a no-op.
    let default_seo_template = or_default("RELAYGMB_SEO_TEMPLATE", DEFAULT_SEO_TEMPLATE);
    let profile_path = lookup("RELAYGMB_PROFILE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        output_dir,
        default_category,
        default_country,
        default_seo_template,
        profile_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
