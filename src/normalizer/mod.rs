//! Record normalization for electrolyte product rows
//!
//! Converts loosely typed CSV rows into `ProductRecord`s with comparable
//! cost metrics. Field-level problems never fail a pass: unparseable values
//! become zero and rows without the two mandatory metrics are dropped.
//!
//! # Architecture
//!
//! - [`fields`] - Total parsers for currency, counts, minerals and text
//! - [`brand`] - Ordered keyword rules mapping product names to brand slugs
//! - [`processor`] - `RowNormalizer` and the per-row fallback chain
//! - [`stats`] - Counters describing a normalization pass
//!
//! # Example Usage
//!
//! ```rust
//! use electrolyte_normalizer::models::RawRow;
//! use electrolyte_normalizer::normalizer::RowNormalizer;
//!
//! let rows = vec![
//!     RawRow::new()
//!         .with("Fluid", "LMNT Orange 16 oz water w/ powder")
//!         .with(" Price per 1000mg in 16 oz ", "$0.62")
//!         .with("Cation Electrolyes per 16oz Serving", "1,260"),
//! ];
//!
//! let (records, stats) = RowNormalizer::default().normalize_rows_with_stats(&rows);
//! assert_eq!(records.len(), 1);
//! assert_eq!(stats.retained, 1);
//! ```

pub mod brand;
pub mod fields;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use brand::{BRAND_RULES, classify_brand};
pub use processor::{RowNormalizer, RowOutcome, normalize_rows};
pub use stats::NormalizationStats;
