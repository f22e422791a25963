//! CLI argument definitions for survey-search

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "survey-search")]
#[command(about = "Cross-match a sky position against astronomical survey catalogs")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Query surveys through VizieR TAP where both dialects exist
    #[arg(long, global = true)]
    pub vizier: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported catalogs
    Catalogs,

    /// Print the query URL of one catalog
    Url(UrlArgs),

    /// Search catalogs around a position
    Search(SearchArgs),

    /// Nearest match per target for a CSV target list
    Batch(BatchArgs),
}

#[derive(Parser)]
pub struct UrlArgs {
    /// Catalog name or key
    pub catalog: String,

    /// Position as "ra dec" (degrees, hh:mm:ss ±dd:mm:ss, or hh mm ss ±dd mm ss)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub position: Vec<String>,

    /// Search radius in arcsec (defaults to the settings value)
    #[arg(long)]
    pub radius: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Position as "ra dec" (degrees, hh:mm:ss ±dd:mm:ss, or hh mm ss ±dd mm ss)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub position: Vec<String>,

    /// Search radius in arcsec (defaults to the settings value)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Catalog names or keys, comma separated (defaults to the settings list)
    #[arg(long, value_delimiter = ',')]
    pub catalogs: Vec<String>,

    /// Keep only the nearest match of each catalog
    #[arg(long)]
    pub nearest: bool,

    /// JSON object of extinction values keyed by band (e.g. {"SDSS_G": 0.2})
    #[arg(long)]
    pub extinction: Option<PathBuf>,

    /// Report colors in the Vega system (JSON output)
    #[arg(long)]
    pub vega: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with a name,ra,dec header
    #[arg(long)]
    pub targets: PathBuf,

    /// Output directory, one CSV per catalog
    #[arg(long)]
    pub output: PathBuf,

    /// Search radius in arcsec (defaults to the settings value)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Catalog names or keys, comma separated (defaults to the settings list)
    #[arg(long, value_delimiter = ',')]
    pub catalogs: Vec<String>,
}
