//! Normalization statistics for a single pass over raw rows

use serde::Serialize;

/// Counters describing what happened to each input row
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizationStats {
    /// Number of raw rows handed to the normalizer
    pub total_rows: usize,
    /// Rows dropped because `Fluid` was blank
    pub missing_brand: usize,
    /// Rows dropped because price per 1000mg or total electrolytes was not positive
    pub invalid_metrics: usize,
    /// Rows emitted as product records
    pub retained: usize,
    /// Records whose 16oz serving price came from the native serving price
    pub serving_price_fallbacks: usize,
    /// Records whose price per 1000mg was computed from the serving price
    pub thousand_price_fallbacks: usize,
}

impl NormalizationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows dropped for any reason
    pub fn dropped(&self) -> usize {
        self.missing_brand + self.invalid_metrics
    }

    /// Percentage of input rows that became records
    pub fn retention_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.retained as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalization: {} -> {} records ({:.1}% retained) | \
             missing brand: {} | invalid metrics: {} | \
             fallbacks: {} serving price, {} price per 1000mg",
            self.total_rows,
            self.retained,
            self.retention_rate(),
            self.missing_brand,
            self.invalid_metrics,
            self.serving_price_fallbacks,
            self.thousand_price_fallbacks
        )
    }
}
