//! Command-line argument definitions for the electrolyte normalizer
//!
//! Every subcommand reads the same product CSV and renders a different
//! view of the normalized records.

use crate::config::NormalizerConfig;
use crate::constants::DEFAULT_LOGO_DIR;
use crate::views::{SortConfig, SortDirection, SortKey, TypeFilter};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the electrolyte normalizer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "electrolyte-normalizer",
    version,
    about = "Normalize electrolyte beverage CSV data into comparable cost-per-1000mg records",
    long_about = "Reads an electrolyte product CSV, derives price per 1000mg of cation \
                  electrolytes and 16oz-equivalent serving prices with fallbacks for missing \
                  columns, classifies brands, and prints records, summaries and comparison views."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory logo paths are built under
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_LOGO_DIR)]
    pub logo_dir: String,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Build the normalizer configuration from CLI overrides
    pub fn to_config(&self) -> NormalizerConfig {
        let config = NormalizerConfig::default().with_logo_dir(self.logo_dir.clone());
        match &self.command {
            Commands::Compare(args) => {
                let config = config
                    .with_comparison_limit(args.limit)
                    .with_comparison_price_ceiling(args.price_ceiling);
                if args.brands.is_empty() {
                    config
                } else {
                    config.with_comparison_brands(args.brands.iter().cloned())
                }
            }
            Commands::Minerals(args) => match &args.anchor {
                Some(anchor) => config.with_mineral_anchor_product(anchor.clone()),
                None => config,
            },
            _ => config,
        }
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print every normalized product record
    Normalize(OutputArgs),
    /// Print best/worst value, Re-Lyte rank and average price
    Summary(OutputArgs),
    /// Print the sortable, filterable product table
    Table(TableArgs),
    /// Compare one product per major brand against Re-Lyte
    Compare(CompareArgs),
    /// Show the sodium/potassium focus selection
    Minerals(MineralArgs),
}

impl Commands {
    pub fn input(&self) -> &PathBuf {
        match self {
            Commands::Normalize(args) | Commands::Summary(args) => &args.input,
            Commands::Table(args) => &args.output.input,
            Commands::Compare(args) => &args.output.input,
            Commands::Minerals(args) => &args.output.input,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Commands::Normalize(args) | Commands::Summary(args) => args.format,
            Commands::Table(args) => args.output.format,
            Commands::Compare(args) => args.output.format,
            Commands::Minerals(args) => args.output.format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Input path and output format shared by all subcommands
#[derive(Debug, Clone, ClapArgs)]
pub struct OutputArgs {
    /// Path to the product CSV
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct TableArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Column to sort by (brand, type, pricePerThousand, totalElectrolytes,
    /// pricePerServing, sodium, potassium, calcium, magnesium)
    #[arg(long, value_name = "KEY", default_value = "pricePerThousand")]
    pub sort_by: SortKey,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub descending: bool,

    /// Only show one product type, e.g. "RTD" ("all" shows every type)
    #[arg(long = "type", value_name = "TYPE")]
    pub product_type: Option<String>,
}

impl TableArgs {
    pub fn sort_config(&self) -> SortConfig {
        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortConfig::new(self.sort_by, direction)
    }

    pub fn type_filter(&self) -> TypeFilter {
        TypeFilter::from(self.product_type.clone())
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CompareArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Maximum number of brands to show
    #[arg(long, default_value_t = crate::constants::DEFAULT_COMPARISON_LIMIT)]
    pub limit: usize,

    /// Ignore products above this price per 1000mg
    #[arg(long, default_value_t = crate::constants::DEFAULT_COMPARISON_PRICE_CEILING)]
    pub price_ceiling: f64,

    /// Brand slugs to include (comma-separated); defaults to the major brands
    #[arg(long, value_delimiter = ',', value_name = "SLUGS")]
    pub brands: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct MineralArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Exact product name that anchors the view
    #[arg(long, value_name = "PRODUCT")]
    pub anchor: Option<String>,
}
