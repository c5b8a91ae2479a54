//! Application constants for the electrolyte normalizer
//!
//! Column names are the integration contract with the source CSV and are
//! matched byte-for-byte, including their surrounding whitespace and the
//! upstream spelling mistakes.

// =============================================================================
// CSV Column Names
// =============================================================================

pub mod columns {
    /// Product display name; rows without it are dropped
    pub const FLUID: &str = "Fluid";

    /// Free-text product category
    pub const PRODUCT_TYPE: &str = "Type of Product";

    /// Price per 1000mg of cation electrolytes, 16oz basis
    pub const PRICE_PER_THOUSAND: &str = " Price per 1000mg in 16 oz ";

    /// Total cation electrolytes per 16oz serving (may contain commas)
    pub const CATION_ELECTROLYTES: &str = "Cation Electrolyes per 16oz Serving";

    /// Price per 16oz serving
    pub const PRICE_PER_16OZ_SERVING: &str = " Price Per 16 oz Serving ";

    /// Serving size in ounces, only used as a fallback divisor
    pub const SERVING_SIZE_OZ: &str = "Serving Size (oz)";

    /// Price per native serving, fallback source
    pub const PRICE_PER_SERVING: &str = " Price Per Serving ";

    pub const SODIUM_MG: &str = "Sodium (mg)";
    pub const POTASSIUM_MG: &str = "Potassium (mg)";
    pub const CALCIUM_MG: &str = "Calcium (mg)";
    pub const MAGNESIUM_MG: &str = "Magneisum (mg)";

    /// Columns the normalizer reads, in source order
    pub const EXPECTED: &[&str] = &[
        FLUID,
        PRODUCT_TYPE,
        PRICE_PER_THOUSAND,
        CATION_ELECTROLYTES,
        PRICE_PER_16OZ_SERVING,
        SERVING_SIZE_OZ,
        PRICE_PER_SERVING,
        SODIUM_MG,
        POTASSIUM_MG,
        CALCIUM_MG,
        MAGNESIUM_MG,
    ];
}

// =============================================================================
// Unit Conversions
// =============================================================================

/// Serving volume every price is normalized to
pub const REFERENCE_SERVING_OZ: f64 = 16.0;

/// Electrolyte mass the headline price metric is quoted against
pub const PRICE_BASIS_MG: f64 = 1000.0;

// =============================================================================
// Logo Conventions
// =============================================================================

/// Directory logo paths are rooted at
pub const DEFAULT_LOGO_DIR: &str = "/logos";

/// Brand slugs whose only logo asset is an SVG
pub const SVG_ONLY_SLUGS: &[&str] = &["electrolit", "generic"];

// =============================================================================
// Product Types
// =============================================================================

pub mod product_types {
    pub const BULK_POWDER: &str = "Bulk Powder";
    pub const READY_TO_DRINK: &str = "RTD";
    pub const STICK_PACK: &str = "Stick Pack";
}

// =============================================================================
// Dashboard Views
// =============================================================================

/// Products above this price per 1000mg are treated as data errors in comparisons
pub const DEFAULT_COMPARISON_PRICE_CEILING: f64 = 10.0;

/// Number of brands shown in the comparison view
pub const DEFAULT_COMPARISON_LIMIT: usize = 10;

/// Brand slugs eligible for the comparison view
pub const DEFAULT_COMPARISON_BRANDS: &[&str] = &[
    "relyte",
    "gatorade",
    "lmnt",
    "liquid-iv",
    "prime",
    "pedialyte",
    "bodyarmour",
    "ultima",
    "nuun",
    "propel",
];

/// Product that anchors the sodium/potassium view
pub const DEFAULT_MINERAL_ANCHOR_PRODUCT: &str = "Relyte Strawberry 16oz. w/ powder";

/// Brand names matched (case-insensitively, either direction) for the mineral view
pub const DEFAULT_MINERAL_TARGET_BRANDS: &[&str] = &[
    "mountain ops",
    "wilderness athlete",
    "black flag",
    "bucked up",
    "gatorade",
    "liquid iv",
    "propel",
    "prime",
];

/// Maximum characters kept in a simplified brand label before ellipsis
pub const BRAND_LABEL_MAX_CHARS: usize = 25;

/// Re-Lyte flavor the brand comparison shows in preference to the cheapest
pub const RELYTE_COMPARISON_FLAVOR: &str = "Strawberry";
