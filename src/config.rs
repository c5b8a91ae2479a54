//! Configuration management and validation.
//!
//! Holds the naming conventions used while normalizing rows and the
//! selection rules behind the derived dashboard views.

use crate::constants::{
    DEFAULT_COMPARISON_BRANDS, DEFAULT_COMPARISON_LIMIT, DEFAULT_COMPARISON_PRICE_CEILING,
    DEFAULT_LOGO_DIR, DEFAULT_MINERAL_ANCHOR_PRODUCT, DEFAULT_MINERAL_TARGET_BRANDS,
    REFERENCE_SERVING_OZ,
};
use crate::error::{NormalizerError, Result};
use serde::{Deserialize, Serialize};

/// Global configuration for normalization and view derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Directory logo paths are built under
    pub logo_dir: String,

    /// Serving volume (oz) prices are normalized to
    pub reference_serving_oz: f64,

    /// Upper bound on price per 1000mg for the brand comparison
    pub comparison_price_ceiling: f64,

    /// Maximum number of brands in the comparison
    pub comparison_limit: usize,

    /// Brand slugs considered by the comparison
    pub comparison_brands: Vec<String>,

    /// Exact product name that anchors the mineral view
    pub mineral_anchor_product: String,

    /// Brand names selected by the mineral view
    pub mineral_target_brands: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            logo_dir: DEFAULT_LOGO_DIR.to_string(),
            reference_serving_oz: REFERENCE_SERVING_OZ,
            comparison_price_ceiling: DEFAULT_COMPARISON_PRICE_CEILING,
            comparison_limit: DEFAULT_COMPARISON_LIMIT,
            comparison_brands: DEFAULT_COMPARISON_BRANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mineral_anchor_product: DEFAULT_MINERAL_ANCHOR_PRODUCT.to_string(),
            mineral_target_brands: DEFAULT_MINERAL_TARGET_BRANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NormalizerConfig {
    /// Use a different logo directory
    pub fn with_logo_dir(mut self, logo_dir: impl Into<String>) -> Self {
        self.logo_dir = logo_dir.into();
        self
    }

    /// Set the comparison price ceiling
    pub fn with_comparison_price_ceiling(mut self, ceiling: f64) -> Self {
        self.comparison_price_ceiling = ceiling;
        self
    }

    /// Set the number of brands kept by the comparison
    pub fn with_comparison_limit(mut self, limit: usize) -> Self {
        self.comparison_limit = limit;
        self
    }

    /// Replace the comparison brand list
    pub fn with_comparison_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comparison_brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Set the product that anchors the mineral view
    pub fn with_mineral_anchor_product(mut self, product: impl Into<String>) -> Self {
        self.mineral_anchor_product = product.into();
        self
    }

    /// Check the configuration for values that would make derivation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.logo_dir.trim().is_empty() {
            return Err(NormalizerError::configuration("logo_dir must not be empty"));
        }
        if !(self.reference_serving_oz > 0.0) {
            return Err(NormalizerError::configuration(format!(
                "reference_serving_oz must be positive, got {}",
                self.reference_serving_oz
            )));
        }
        if !(self.comparison_price_ceiling > 0.0) {
            return Err(NormalizerError::configuration(format!(
                "comparison_price_ceiling must be positive, got {}",
                self.comparison_price_ceiling
            )));
        }
        if self.comparison_limit == 0 {
            return Err(NormalizerError::configuration(
                "comparison_limit must be at least 1",
            ));
        }
        Ok(())
    }
}
