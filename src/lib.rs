//! Electrolyte Normalizer Library
//!
//! Turns a spreadsheet-exported CSV of electrolyte beverage products into
//! normalized, comparable cost-per-1000mg records for a comparison dashboard.
//!
//! This library provides tools for:
//! - Reading the product CSV with exact header names and dynamically typed cells
//! - Parsing currency and count strings with JavaScript-style prefix semantics
//! - Deriving missing prices from serving size and electrolyte totals
//! - Classifying product names into brand slugs and logo paths
//! - Summary statistics, sortable tables and brand/mineral comparison views

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod summary;
pub mod utils;
pub mod views;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::NormalizerConfig;
pub use error::{NormalizerError, Result};
pub use models::{BrandSlug, ProductCategory, ProductRecord, RawRow, RawValue};
pub use normalizer::{NormalizationStats, RowNormalizer, classify_brand, normalize_rows};
pub use pipeline::{LoadOutcome, NormalizedDataset, load_and_normalize, try_load_and_normalize};
pub use summary::{SummaryStatistics, summarize};
