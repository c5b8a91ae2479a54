//! Row normalizer and pass orchestration
//!
//! Turns raw CSV rows into `ProductRecord`s: admission filter, price and
//! electrolyte parsing, the serving-price and price-per-1000mg fallback
//! chain, brand classification and the final metric filter.

use crate::config::NormalizerConfig;
use crate::constants::{PRICE_BASIS_MG, columns};
use crate::models::{BrandSlug, ProductRecord, RawRow};
use tracing::{debug, info};

use super::brand::classify_brand;
use super::fields::{
    finite_or_zero, parse_count, parse_currency, parse_mineral, parse_plain, parse_text,
};
use super::stats::NormalizationStats;

/// What the normalizer did with a single row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Row became a record; flags note which fallbacks fired
    Retained {
        record: ProductRecord,
        serving_price_fallback: bool,
        thousand_price_fallback: bool,
    },
    /// `Fluid` was blank or missing
    MissingBrand,
    /// Price per 1000mg or total electrolytes ended up non-positive
    InvalidMetrics { brand: String },
}

/// Stateless row normalizer parameterized by naming conventions
#[derive(Debug, Clone, Default)]
pub struct RowNormalizer {
    config: NormalizerConfig,
}

impl RowNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize one row
    pub fn normalize_row(&self, row: &RawRow) -> RowOutcome {
        let fluid = row.get(columns::FLUID);
        if fluid.is_blank() {
            return RowOutcome::MissingBrand;
        }
        let brand = parse_text(fluid);

        let mut price_per_thousand = parse_currency(row.get(columns::PRICE_PER_THOUSAND));
        let total_electrolytes = parse_count(row.get(columns::CATION_ELECTROLYTES));
        let mut price_per_serving = parse_currency(row.get(columns::PRICE_PER_16OZ_SERVING));

        let mut serving_price_fallback = false;
        if price_per_serving == 0.0 {
            let serving_size = parse_plain(row.get(columns::SERVING_SIZE_OZ));
            let native_price = parse_currency(row.get(columns::PRICE_PER_SERVING));
            if native_price > 0.0 && serving_size > 0.0 {
                price_per_serving =
                    native_price * self.config.reference_serving_oz / serving_size;
                serving_price_fallback = true;
            }
        }

        let mut thousand_price_fallback = false;
        if price_per_thousand == 0.0 && price_per_serving > 0.0 && total_electrolytes > 0.0 {
            price_per_thousand = price_per_serving / (total_electrolytes / PRICE_BASIS_MG);
            thousand_price_fallback = true;
        }

        let brand_slug = classify_brand(&brand);
        let record = ProductRecord {
            product_type: parse_text(row.get(columns::PRODUCT_TYPE)),
            price_per_thousand: finite_or_zero(price_per_thousand),
            total_electrolytes: finite_or_zero(total_electrolytes),
            price_per_serving: finite_or_zero(price_per_serving),
            sodium: parse_mineral(row.get(columns::SODIUM_MG)),
            potassium: parse_mineral(row.get(columns::POTASSIUM_MG)),
            calcium: parse_mineral(row.get(columns::CALCIUM_MG)),
            magnesium: parse_mineral(row.get(columns::MAGNESIUM_MG)),
            is_relyte: brand_slug == BrandSlug::Relyte,
            logo_path: brand_slug.logo_path(&self.config.logo_dir),
            brand_slug,
            brand,
        };

        if !record.has_valid_metrics() {
            return RowOutcome::InvalidMetrics {
                brand: record.brand,
            };
        }

        RowOutcome::Retained {
            record,
            serving_price_fallback,
            thousand_price_fallback,
        }
    }

    /// Normalize a full pass, preserving input order of retained rows
    pub fn normalize_rows_with_stats(
        &self,
        rows: &[RawRow],
    ) -> (Vec<ProductRecord>, NormalizationStats) {
        let mut stats = NormalizationStats::new();
        stats.total_rows = rows.len();
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            match self.normalize_row(row) {
                RowOutcome::Retained {
                    record,
                    serving_price_fallback,
                    thousand_price_fallback,
                } => {
                    if serving_price_fallback {
                        stats.serving_price_fallbacks += 1;
                    }
                    if thousand_price_fallback {
                        stats.thousand_price_fallbacks += 1;
                    }
                    records.push(record);
                }
                RowOutcome::MissingBrand => {
                    debug!("Row {} dropped: missing product name", index + 1);
                    stats.missing_brand += 1;
                }
                RowOutcome::InvalidMetrics { brand } => {
                    debug!(
                        "Row {} dropped: '{}' has no usable price per 1000mg or electrolyte total",
                        index + 1,
                        brand
                    );
                    stats.invalid_metrics += 1;
                }
            }
        }

        stats.retained = records.len();
        info!("{}", stats.summary());

        (records, stats)
    }

    /// Normalize a full pass, discarding statistics
    pub fn normalize_rows(&self, rows: &[RawRow]) -> Vec<ProductRecord> {
        self.normalize_rows_with_stats(rows).0
    }
}

/// Normalize rows with the default configuration
pub fn normalize_rows(rows: &[RawRow]) -> Vec<ProductRecord> {
    RowNormalizer::default().normalize_rows(rows)
}
