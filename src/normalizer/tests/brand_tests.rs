//! Tests for brand classification

use crate::models::BrandSlug;
use crate::normalizer::brand::{BRAND_RULES, classify_brand};

#[test]
fn test_classify_known_products() {
    let cases = [
        ("Relyte - Unflavored 16 oz w/ powder", BrandSlug::Relyte),
        ("Re-Lyte Energy Limeade - 14 oz, w/ powder", BrandSlug::Relyte),
        ("LMNT - sparkling Electrolyte drink, decarbonated", BrandSlug::Lmnt),
        ("Liquid IV Sugar-Free Lemon Lime 16 oz w/ powder", BrandSlug::LiquidIv),
        ("Gatorade Lemon Lime, RTD", BrandSlug::Gatorade),
        ("Bodyarmour Lyte - Peach Mango RTD", BrandSlug::Bodyarmour),
        ("Pedialyte - Strawberry, RTD", BrandSlug::Pedialyte),
        ("Ultima Grape", BrandSlug::Ultima),
        ("Nuun Sport Hydration (tablet)", BrandSlug::Nuun),
        ("Propel Fitness Water - Berry, RTD", BrandSlug::Propel),
        ("Powerade Fruit Punch, RTD", BrandSlug::Powerade),
        ("Electrolit Coconut", BrandSlug::Electrolit),
        ("Prime Hydration Ice Pop", BrandSlug::Prime),
        ("Kinderlyte Grape", BrandSlug::Kinderlyte),
        ("DripDrop ORS Watermelon", BrandSlug::DripDrop),
        ("Mountain Ops Ignite", BrandSlug::MountainOps),
    ];

    for (name, expected) in cases {
        assert_eq!(classify_brand(name), expected, "misclassified '{}'", name);
    }
}

#[test]
fn test_gatorlyte_maps_to_gatorade() {
    assert_eq!(
        classify_brand("Gatorlyte rapid rehydration"),
        BrandSlug::Gatorade
    );
}

#[test]
fn test_unknown_brand_is_generic() {
    assert_eq!(classify_brand("Black Flag Hydrate"), BrandSlug::Generic);
    assert_eq!(classify_brand(""), BrandSlug::Generic);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify_brand("NUUN"), BrandSlug::Nuun);
    assert_eq!(classify_brand("re-LYTE kids"), BrandSlug::Relyte);
}

#[test]
fn test_first_rule_wins() {
    // Mentions a competitor after the product's own brand
    assert_eq!(
        classify_brand("Relyte vs LMNT sampler"),
        BrandSlug::Relyte
    );
    // "prime" appears earlier in the text, but propel precedes it in rule order
    assert_eq!(
        classify_brand("Prime-time Propel pack"),
        BrandSlug::Propel
    );
    // Kinderlyte contains no earlier keyword, pedialyte rule must not catch it
    assert_eq!(classify_brand("Kinderlyte"), BrandSlug::Kinderlyte);
}

#[test]
fn test_rule_table_order() {
    let keywords: Vec<&str> = BRAND_RULES.iter().map(|(keyword, _)| *keyword).collect();
    assert_eq!(keywords.first(), Some(&"relyte"));
    assert_eq!(keywords.last(), Some(&"mountain"));

    let position = |kw: &str| keywords.iter().position(|k| *k == kw).unwrap();
    assert!(position("gatorlyte") < position("prime"));
    assert!(position("propel") < position("prime"));
    assert!(position("electrolit") < position("drip"));
}
