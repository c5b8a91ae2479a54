//! Summary statistics over a normalized product set.
//!
//! Ranking is by price per 1000mg ascending using a stable sort, so ties
//! keep input order: the earliest of equally cheap products is the best
//! value and the latest of equally expensive ones is the worst.

use crate::models::ProductRecord;
use crate::utils::to_fixed;
use serde::Serialize;
use tracing::debug;

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total_products: usize,
    /// Lowest price per 1000mg
    pub best_value: Option<ProductRecord>,
    /// Highest price per 1000mg
    pub worst_value: Option<ProductRecord>,
    /// First Re-Lyte product in input order
    pub relyte_best: Option<ProductRecord>,
    /// 1-based position of the cheapest Re-Lyte product by price
    pub relyte_rank: Option<usize>,
    /// Mean price per 1000mg across all products
    pub average_price: Option<f64>,
    /// `average_price` rounded to cents with ties rounded up, as displayed
    pub avg_price: Option<String>,
}

impl SummaryStatistics {
    /// Compute the summary for `records`; empty input leaves every optional field unset
    pub fn from_records(records: &[ProductRecord]) -> Self {
        let mut ranked: Vec<&ProductRecord> = records.iter().collect();
        ranked.sort_by(|a, b| a.price_per_thousand.total_cmp(&b.price_per_thousand));

        let relyte_rank = ranked
            .iter()
            .position(|record| record.is_relyte)
            .map(|index| index + 1);

        let average_price = if records.is_empty() {
            None
        } else {
            let total: f64 = records.iter().map(|r| r.price_per_thousand).sum();
            Some(total / records.len() as f64)
        };

        let summary = Self {
            total_products: records.len(),
            best_value: ranked.first().map(|r| (*r).clone()),
            worst_value: ranked.last().map(|r| (*r).clone()),
            relyte_best: records.iter().find(|r| r.is_relyte).cloned(),
            relyte_rank,
            average_price,
            avg_price: average_price.map(|avg| to_fixed(avg, 2)),
        };

        debug!(
            "Summary computed: {} products, Re-Lyte rank {:?}, average {:?}",
            summary.total_products, summary.relyte_rank, summary.avg_price
        );

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }

    /// How many times more the worst product costs than the best, per 1000mg
    pub fn value_spread(&self) -> Option<f64> {
        let best = self.best_value.as_ref()?.price_per_thousand;
        let worst = self.worst_value.as_ref()?.price_per_thousand;
        (best > 0.0).then(|| worst / best)
    }
}

/// Compute summary statistics for a product set
pub fn summarize(records: &[ProductRecord]) -> SummaryStatistics {
    SummaryStatistics::from_records(records)
}
