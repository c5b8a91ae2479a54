//! Load-and-normalize entry point.
//!
//! A pass is all-or-nothing at the resource level: either the CSV is read
//! and every row normalized, or the caller receives a single failure
//! message and no partial data.

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::loader::load_rows;
use crate::models::{ProductRecord, RawRow};
use crate::normalizer::{NormalizationStats, RowNormalizer};
use crate::summary::SummaryStatistics;
use std::path::PathBuf;
use tracing::{error, info};

/// Records and summary produced by one complete pass
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub records: Vec<ProductRecord>,
    pub summary: SummaryStatistics,
    pub stats: NormalizationStats,
}

impl NormalizedDataset {
    /// Normalize already-loaded rows and summarize them
    pub fn from_rows(rows: &[RawRow], config: &NormalizerConfig) -> Self {
        let normalizer = RowNormalizer::new(config.clone());
        let (records, stats) = normalizer.normalize_rows_with_stats(rows);
        let summary = SummaryStatistics::from_records(&records);
        Self {
            records,
            summary,
            stats,
        }
    }
}

/// Result of a load pass as seen by presentation
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Success {
        records: Vec<ProductRecord>,
        summary: SummaryStatistics,
        stats: NormalizationStats,
    },
    Failure {
        message: String,
    },
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Success { .. })
    }

    /// Records of a successful pass, `None` on failure
    pub fn records(&self) -> Option<&[ProductRecord]> {
        match self {
            LoadOutcome::Success { records, .. } => Some(records),
            LoadOutcome::Failure { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<&SummaryStatistics> {
        match self {
            LoadOutcome::Success { summary, .. } => Some(summary),
            LoadOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            LoadOutcome::Failure { message } => Some(message),
            LoadOutcome::Success { .. } => None,
        }
    }
}

impl From<Result<NormalizedDataset>> for LoadOutcome {
    fn from(result: Result<NormalizedDataset>) -> Self {
        match result {
            Ok(dataset) => LoadOutcome::Success {
                records: dataset.records,
                summary: dataset.summary,
                stats: dataset.stats,
            },
            Err(e) => LoadOutcome::Failure {
                message: e.to_string(),
            },
        }
    }
}

/// Load the CSV at `path` and normalize it, propagating resource errors
pub async fn try_load_and_normalize(
    path: impl Into<PathBuf>,
    config: &NormalizerConfig,
) -> Result<NormalizedDataset> {
    config.validate()?;
    let rows = load_rows(path).await?;
    let dataset = NormalizedDataset::from_rows(&rows, config);

    info!(
        "Loaded {} products ({} rows read)",
        dataset.records.len(),
        rows.len()
    );
    Ok(dataset)
}

/// Load the CSV at `path` and normalize it into a `LoadOutcome`
pub async fn load_and_normalize(
    path: impl Into<PathBuf>,
    config: &NormalizerConfig,
) -> LoadOutcome {
    let result = try_load_and_normalize(path, config).await;
    if let Err(e) = &result {
        error!("Error loading electrolyte data: {}", e);
    }
    LoadOutcome::from(result)
}
