//! Tests for the record normalizer module

pub mod brand_tests;

use crate::constants::columns;
use crate::models::RawRow;

/// Row carrying only a product name
pub fn create_named_row(name: &str) -> RawRow {
    RawRow::new().with(columns::FLUID, name)
}

/// Row with both headline metrics given directly
pub fn create_complete_row(name: &str, price_per_thousand: &str, electrolytes: &str) -> RawRow {
    create_named_row(name)
        .with(columns::PRODUCT_TYPE, "Bulk Powder")
        .with(columns::PRICE_PER_THOUSAND, price_per_thousand)
        .with(columns::CATION_ELECTROLYTES, electrolytes)
}

/// Row that needs both fallbacks: 8oz serving at $1.00 with 1000mg electrolytes
pub fn create_fallback_row(name: &str) -> RawRow {
    create_named_row(name)
        .with(columns::PRODUCT_TYPE, "Stick Pack")
        .with(columns::PRICE_PER_THOUSAND, "")
        .with(columns::PRICE_PER_16OZ_SERVING, "")
        .with(columns::SERVING_SIZE_OZ, "8")
        .with(columns::PRICE_PER_SERVING, "$1.00")
        .with(columns::CATION_ELECTROLYTES, "1000")
}

/// The Re-Lyte Strawberry row from the source dataset
pub fn create_relyte_strawberry_row() -> RawRow {
    create_named_row("Relyte Strawberry 16oz. w/ powder")
        .with(columns::PRODUCT_TYPE, "Bulk Powder")
        .with(columns::PRICE_PER_THOUSAND, "$0.38")
        .with(columns::CATION_ELECTROLYTES, "1,560")
        .with(columns::SODIUM_MG, 760.0)
        .with(columns::POTASSIUM_MG, 380.0)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
