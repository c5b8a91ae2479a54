//! Brand classification from free-text product names
//!
//! Classification is an ordered decision list. Some product names mention
//! other brands in their marketing copy, so rules are evaluated strictly
//! in table order and the first keyword found wins.

use crate::models::BrandSlug;

/// Ordered `(keyword, slug)` rules matched against the lower-cased name
pub const BRAND_RULES: &[(&str, BrandSlug)] = &[
    ("relyte", BrandSlug::Relyte),
    ("re-lyte", BrandSlug::Relyte),
    ("lmnt", BrandSlug::Lmnt),
    ("liquid iv", BrandSlug::LiquidIv),
    ("gatorade", BrandSlug::Gatorade),
    ("gatorlyte", BrandSlug::Gatorade),
    ("bodyarmour", BrandSlug::Bodyarmour),
    ("pedialyte", BrandSlug::Pedialyte),
    ("ultima", BrandSlug::Ultima),
    ("nuun", BrandSlug::Nuun),
    ("propel", BrandSlug::Propel),
    ("powerade", BrandSlug::Powerade),
    ("electrolit", BrandSlug::Electrolit),
    ("prime", BrandSlug::Prime),
    ("kinderlyte", BrandSlug::Kinderlyte),
    ("drip", BrandSlug::DripDrop),
    ("mountain", BrandSlug::MountainOps),
];

/// Classify a product name into a brand slug, `Generic` when nothing matches
pub fn classify_brand(name: &str) -> BrandSlug {
    let lowered = name.to_lowercase();
    BRAND_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, slug)| *slug)
        .unwrap_or(BrandSlug::Generic)
}
