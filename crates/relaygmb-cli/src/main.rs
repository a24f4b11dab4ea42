mod convert;
mod listings;
mod output;
mod resolve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "relaygmb")]
#[command(about = "Convert Mondial Relay locker exports into Google Business Profile imports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a courier export into a GMB bulk-import file
    Convert(ConvertArgs),
    /// Keep only generated listings whose store code is not already listed
    Update {
        /// Listings file already imported into GMB
        existing: PathBuf,
        /// Freshly generated listings file
        generated: PathBuf,
        /// Directory for the output file
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Rewrite listing names from a template
    Seo(SeoArgs),
    /// Strip accents from every text column of a listings file
    StripAccents {
        /// Listings file to clean
        input: PathBuf,
        /// Directory for the output file
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ConvertArgs {
    /// Courier export (.xlsx, .xls or .ods)
    pub input: PathBuf,
    /// Business description written to every listing
    #[arg(long)]
    pub description: Option<String>,
    /// Primary GMB category
    #[arg(long)]
    pub category: Option<String>,
    /// YAML run profile
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Directory for the output file
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Print the first N converted listings as JSON
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,
    /// Convert without writing a file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct SeoArgs {
    /// Listings file to rename
    pub input: PathBuf,
    /// Name template using {Ville}, {CP} and {Adresse}
    #[arg(long)]
    pub template: Option<String>,
    /// Remove {Ville} instead of filling it
    #[arg(long)]
    pub no_city: bool,
    /// Remove {CP} instead of filling it
    #[arg(long)]
    pub no_postal_code: bool,
    /// Remove {Adresse} instead of filling it
    #[arg(long)]
    pub no_street: bool,
    /// Keep punctuation and symbols in names
    #[arg(long)]
    pub keep_special: bool,
    /// Keep the template's casing
    #[arg(long)]
    pub no_capitalize: bool,
    /// Also strip accents from every text column
    #[arg(long)]
    pub strip_accents: bool,
    /// YAML run profile
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Directory for the output file
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let config = relaygmb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => convert::run_convert(&config, &args),
        Commands::Update {
            existing,
            generated,
            output_dir,
        } => listings::run_update(&config, &existing, &generated, output_dir.as_deref()),
        Commands::Seo(args) => listings::run_seo(&config, &args),
        Commands::StripAccents { input, output_dir } => {
            listings::run_strip_accents(&config, &input, output_dir.as_deref())
        }
    }
}

#[cfg(test)]
mod tests;
