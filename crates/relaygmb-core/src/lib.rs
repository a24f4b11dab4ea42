//! Shared data model and configuration for the Mondial Relay → GMB tooling.
//!
//! Everything here is plain data: the courier-side [`SourceRecord`], the
//! fixed-schema [`DestinationRecord`], the per-run [`GlobalSettings`] and
//! [`SeoOptions`], plus environment and YAML profile loading.

pub mod app_config;
pub mod config;
pub mod profile;
pub mod records;
pub mod schema;
pub mod settings;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{load_profile, RunProfile};
pub use records::{CellValue, DestinationRecord, SourceRecord};
pub use schema::{DestinationColumn, TimeSlot, Weekday};
pub use settings::{GlobalSettings, SeoOptions};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profile file {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file: {0}")]
    ProfileFileParse(#[source] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}
