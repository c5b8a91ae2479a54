//! Derived views consumed by the dashboard.
//!
//! Each view is a pure selection or ordering over the normalized records;
//! none of them mutate or re-derive record fields.

use crate::config::NormalizerConfig;
use crate::constants::{BRAND_LABEL_MAX_CHARS, RELYTE_COMPARISON_FLAVOR};
use crate::models::{BrandSlug, ProductCategory, ProductRecord};
use crate::utils::to_fixed;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// =============================================================================
// Table
// =============================================================================

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Brand,
    Type,
    PricePerThousand,
    TotalElectrolytes,
    PricePerServing,
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Brand,
        SortKey::Type,
        SortKey::PricePerThousand,
        SortKey::TotalElectrolytes,
        SortKey::PricePerServing,
        SortKey::Sodium,
        SortKey::Potassium,
        SortKey::Calcium,
        SortKey::Magnesium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Brand => "brand",
            SortKey::Type => "type",
            SortKey::PricePerThousand => "pricePerThousand",
            SortKey::TotalElectrolytes => "totalElectrolytes",
            SortKey::PricePerServing => "pricePerServing",
            SortKey::Sodium => "sodium",
            SortKey::Potassium => "potassium",
            SortKey::Calcium => "calcium",
            SortKey::Magnesium => "magnesium",
        }
    }

    fn numeric(&self, record: &ProductRecord) -> Option<f64> {
        match self {
            SortKey::Brand | SortKey::Type => None,
            SortKey::PricePerThousand => Some(record.price_per_thousand),
            SortKey::TotalElectrolytes => Some(record.total_electrolytes),
            SortKey::PricePerServing => Some(record.price_per_serving),
            SortKey::Sodium => Some(record.sodium),
            SortKey::Potassium => Some(record.potassium),
            SortKey::Calcium => Some(record.calcium),
            SortKey::Magnesium => Some(record.magnesium),
        }
    }

    /// Ascending comparison of two records on this column
    pub fn compare(&self, a: &ProductRecord, b: &ProductRecord) -> Ordering {
        match self {
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Type => a.product_type.cmp(&b.product_type),
            _ => {
                let (x, y) = (self.numeric(a), self.numeric(b));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "").to_lowercase();
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown sort key '{}'. Expected one of: {}",
                    s,
                    SortKey::ALL
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current table ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::PricePerThousand,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ordering after a column header click
    ///
    /// Clicking the active ascending column flips it to descending; any
    /// other click sorts the clicked column ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Product type filter for the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn matches(&self, record: &ProductRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(product_type) => record.product_type == *product_type,
        }
    }
}

impl From<Option<String>> for TypeFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(t) if t != "all" => TypeFilter::Only(t),
            _ => TypeFilter::All,
        }
    }
}

/// Filter by product type then stably sort; equal keys keep input order
pub fn table_view<'a>(
    records: &'a [ProductRecord],
    filter: &TypeFilter,
    sort: SortConfig,
) -> Vec<&'a ProductRecord> {
    let mut rows: Vec<&ProductRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    rows.sort_by(|a, b| {
        let ordering = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

// =============================================================================
// Brand Comparison
// =============================================================================

static LABEL_CUTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r" - .*").expect("valid label pattern"),
        Regex::new(r" 16 oz.*").expect("valid label pattern"),
        Regex::new(r" w/.*").expect("valid label pattern"),
    ]
});

/// Shorten a product name to its brand-level label
///
/// Drops flavor and packaging suffixes, then truncates long names with an
/// ellipsis.
pub fn simplify_brand_label(brand: &str) -> String {
    let mut label = brand.to_string();
    for cut in LABEL_CUTS.iter() {
        label = cut.replace(&label, "").into_owned();
    }

    if label.chars().count() > BRAND_LABEL_MAX_CHARS {
        let truncated: String = label.chars().take(BRAND_LABEL_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        label
    }
}

/// One bar in the brand comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub record: ProductRecord,
    pub brand_label: String,
    /// Price relative to the reference, e.g. `"2.3x"`; empty for Re-Lyte
    pub multiplier: String,
}

/// One product per comparison brand, most expensive first
///
/// Each brand contributes its cheapest product within the price ceiling,
/// except Re-Lyte, which shows its Strawberry product when there is one
/// (the last one seen) and otherwise the first Re-Lyte product seen.
pub fn brand_comparison(records: &[ProductRecord], config: &NormalizerConfig) -> Vec<ComparisonEntry> {
    let mut order: Vec<&str> = Vec::new();
    let mut chosen: HashMap<&str, &ProductRecord> = HashMap::new();

    for record in records {
        let slug = record.brand_slug.as_str();
        if !config.comparison_brands.iter().any(|b| b == slug) {
            continue;
        }
        let price = record.price_per_thousand;
        if !(price > 0.0 && price <= config.comparison_price_ceiling) {
            continue;
        }

        let current_price = chosen.get(slug).map(|r| r.price_per_thousand);
        let replace = match current_price {
            None => {
                order.push(slug);
                true
            }
            Some(_) if record.brand_slug == BrandSlug::Relyte => {
                record.brand.contains(RELYTE_COMPARISON_FLAVOR)
            }
            Some(current) => price < current,
        };
        if replace {
            chosen.insert(slug, record);
        }
    }

    let mut selected: Vec<&ProductRecord> = order.iter().map(|slug| chosen[slug]).collect();
    selected.sort_by(|a, b| b.price_per_thousand.total_cmp(&a.price_per_thousand));
    selected.truncate(config.comparison_limit);

    let reference = selected
        .iter()
        .find(|r| r.is_relyte)
        .or_else(|| selected.first())
        .map(|r| r.price_per_thousand);

    selected
        .into_iter()
        .map(|record| {
            let multiplier = match reference {
                Some(reference) if !record.is_relyte => {
                    format!("{}x", to_fixed(record.price_per_thousand / reference, 1))
                }
                _ => String::new(),
            };
            ComparisonEntry {
                brand_label: simplify_brand_label(&record.brand),
                multiplier,
                record: record.clone(),
            }
        })
        .collect()
}

// =============================================================================
// Mineral Focus
// =============================================================================

/// Key used for the anchor product in the mineral view
pub const MINERAL_ANCHOR_KEY: &str = "relyte";

/// A product chosen for the sodium/potassium view with the key that selected it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MineralEntry {
    pub key: String,
    pub record: ProductRecord,
}

/// Anchor product plus one product per target brand, in selection order
pub fn mineral_focus(records: &[ProductRecord], config: &NormalizerConfig) -> Vec<MineralEntry> {
    let mut entries: Vec<MineralEntry> = Vec::new();

    let anchor = records
        .iter()
        .rev()
        .find(|r| r.brand == config.mineral_anchor_product);
    if let Some(record) = anchor {
        entries.push(MineralEntry {
            key: MINERAL_ANCHOR_KEY.to_string(),
            record: record.clone(),
        });
    }

    for record in records {
        let brand_lower = record.brand.to_lowercase();
        let matched = config.mineral_target_brands.iter().find(|target| {
            let target = target.to_lowercase();
            brand_lower.contains(&target) || target.contains(&brand_lower)
        });

        if let Some(target) = matched {
            if !entries.iter().any(|e| e.key == *target) {
                entries.push(MineralEntry {
                    key: target.clone(),
                    record: record.clone(),
                });
            }
        }
    }

    entries
}

// =============================================================================
// Category Groups
// =============================================================================

/// Scatter-chart series: one per category, with Re-Lyte split out
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroups {
    pub bulk_powder: Vec<ProductRecord>,
    pub ready_to_drink: Vec<ProductRecord>,
    pub stick_pack: Vec<ProductRecord>,
    pub other: Vec<ProductRecord>,
    pub relyte: Vec<ProductRecord>,
}

impl CategoryGroups {
    pub fn category(&self, category: ProductCategory) -> &[ProductRecord] {
        match category {
            ProductCategory::BulkPowder => &self.bulk_powder,
            ProductCategory::ReadyToDrink => &self.ready_to_drink,
            ProductCategory::StickPack => &self.stick_pack,
            ProductCategory::Other => &self.other,
        }
    }
}

/// Partition records by category, Re-Lyte products into their own series
pub fn group_by_category(records: &[ProductRecord]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for record in records {
        let series = if record.is_relyte {
            &mut groups.relyte
        } else {
            match record.category() {
                ProductCategory::BulkPowder => &mut groups.bulk_powder,
                ProductCategory::ReadyToDrink => &mut groups.ready_to_drink,
                ProductCategory::StickPack => &mut groups.stick_pack,
                ProductCategory::Other => &mut groups.other,
            }
        };
        series.push(record.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::classify_brand;

    fn product(brand: &str, product_type: &str, price: f64, sodium: f64) -> ProductRecord {
        let slug = classify_brand(brand);
        ProductRecord {
            brand: brand.to_string(),
            product_type: product_type.to_string(),
            price_per_thousand: price,
            total_electrolytes: 1000.0,
            price_per_serving: price,
            sodium,
            potassium: 100.0,
            calcium: 0.0,
            magnesium: 0.0,
            brand_slug: slug,
            is_relyte: slug == BrandSlug::Relyte,
            logo_path: slug.logo_path("/logos"),
        }
    }

    fn brands<'a>(rows: impl IntoIterator<Item = &'a ProductRecord>) -> Vec<&'a str> {
        rows.into_iter().map(|r| r.brand.as_str()).collect()
    }

    #[test]
    fn test_sort_config_toggle() {
        let config = SortConfig::default();
        assert_eq!(config.key, SortKey::PricePerThousand);
        assert_eq!(config.direction, SortDirection::Ascending);

        let flipped = config.toggle(SortKey::PricePerThousand);
        assert_eq!(flipped.direction, SortDirection::Descending);

        let back = flipped.toggle(SortKey::PricePerThousand);
        assert_eq!(back.direction, SortDirection::Ascending);

        let other = flipped.toggle(SortKey::Sodium);
        assert_eq!(other, SortConfig::new(SortKey::Sodium, SortDirection::Ascending));
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("pricePerThousand".parse::<SortKey>(), Ok(SortKey::PricePerThousand));
        assert_eq!("price-per-thousand".parse::<SortKey>(), Ok(SortKey::PricePerThousand));
        assert_eq!("SODIUM".parse::<SortKey>(), Ok(SortKey::Sodium));
        assert!("flavor".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_table_view_filters_and_sorts() {
        let records = vec![
            product("Gatorade Lemon Lime, RTD", "RTD", 2.0, 220.0),
            product("LMNT Orange", "Stick Pack", 0.62, 1000.0),
            product("Propel Berry, RTD", "RTD", 1.2, 230.0),
            product("Pedialyte - Strawberry, RTD", "RTD", 1.2, 490.0),
        ];

        let all = table_view(&records, &TypeFilter::All, SortConfig::default());
        assert_eq!(
            brands(all),
            vec![
                "LMNT Orange",
                "Propel Berry, RTD",
                "Pedialyte - Strawberry, RTD",
                "Gatorade Lemon Lime, RTD"
            ]
        );

        let rtd_by_sodium_desc = table_view(
            &records,
            &TypeFilter::Only("RTD".to_string()),
            SortConfig::new(SortKey::Sodium, SortDirection::Descending),
        );
        assert_eq!(
            brands(rtd_by_sodium_desc),
            vec![
                "Pedialyte - Strawberry, RTD",
                "Propel Berry, RTD",
                "Gatorade Lemon Lime, RTD"
            ]
        );

        let by_brand = table_view(
            &records,
            &TypeFilter::All,
            SortConfig::new(SortKey::Brand, SortDirection::Ascending),
        );
        assert_eq!(by_brand[0].brand, "Gatorade Lemon Lime, RTD");
    }

    #[test]
    fn test_type_filter_from_option() {
        assert_eq!(TypeFilter::from(None), TypeFilter::All);
        assert_eq!(TypeFilter::from(Some("all".to_string())), TypeFilter::All);
        assert_eq!(
            TypeFilter::from(Some("RTD".to_string())),
            TypeFilter::Only("RTD".to_string())
        );
    }

    #[test]
    fn test_simplify_brand_label() {
        assert_eq!(simplify_brand_label("Pedialyte - Strawberry, RTD"), "Pedialyte");
        assert_eq!(
            simplify_brand_label("Liquid IV Sugar-Free Lemon Lime 16 oz w/ powder"),
            "Liquid IV Sugar-Free Lemo..."
        );
        assert_eq!(
            simplify_brand_label("Relyte Strawberry 16oz. w/ powder"),
            "Relyte Strawberry 16oz."
        );
        assert_eq!(simplify_brand_label("Ultima Grape"), "Ultima Grape");
        assert_eq!(
            simplify_brand_label("Gatorade Thirst Quencher!"),
            "Gatorade Thirst Quencher!"
        );
        assert_eq!(
            simplify_brand_label("Propel Fitness Water zero Sugar Powder Grape"),
            "Propel Fitness Water zero..."
        );
    }

    #[test]
    fn test_brand_comparison_one_product_per_brand() {
        let records = vec![
            product("Gatorade Powder", "Bulk Powder", 1.80, 100.0),
            product("Relyte - Unflavored 16 oz w/ powder", "Bulk Powder", 0.40, 800.0),
            product("Gatorade Zero powder", "Bulk Powder", 1.20, 100.0),
            product("Relyte Strawberry 16oz. w/ powder", "Bulk Powder", 0.38, 760.0),
            product("LMNT Orange", "Stick Pack", 0.95, 1000.0),
            product("Black Flag Hydrate", "Bulk Powder", 0.20, 500.0),
            product("Nuun Sport", "Tablet", 12.0, 300.0),
        ];

        let entries = brand_comparison(&records, &NormalizerConfig::default());
        let labels: Vec<&str> = entries.iter().map(|e| e.record.brand.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Gatorade Zero powder",
                "LMNT Orange",
                "Relyte Strawberry 16oz. w/ powder"
            ]
        );

        assert_eq!(entries[0].multiplier, "3.2x");
        assert_eq!(entries[0].brand_label, "Gatorade Zero powder");
        assert_eq!(entries[1].multiplier, "2.5x");
        assert_eq!(entries[2].multiplier, "");
    }

    #[test]
    fn test_brand_comparison_prefers_strawberry_over_cheaper_relyte() {
        let strawberry = product("Relyte Strawberry 16oz. w/ powder", "Bulk Powder", 0.60, 760.0);
        let lemon = product("Relyte Lemon Lime", "Bulk Powder", 0.40, 760.0);
        let lmnt = product("LMNT Orange", "Stick Pack", 1.20, 1000.0);

        for records in [
            vec![strawberry.clone(), lemon.clone(), lmnt.clone()],
            vec![lemon.clone(), strawberry.clone(), lmnt.clone()],
        ] {
            let entries = brand_comparison(&records, &NormalizerConfig::default());
            assert_eq!(
                brands(entries.iter().map(|e| &e.record)),
                vec!["LMNT Orange", "Relyte Strawberry 16oz. w/ powder"]
            );
            assert_eq!(entries[0].multiplier, "2.0x");
        }
    }

    #[test]
    fn test_brand_comparison_last_strawberry_wins() {
        let records = vec![
            product("Relyte Strawberry Lemonade", "Bulk Powder", 0.38, 760.0),
            product("Relyte Strawberry 16oz. w/ powder", "Bulk Powder", 0.50, 760.0),
            product("Relyte Unflavored", "Bulk Powder", 0.30, 760.0),
        ];
        let entries = brand_comparison(&records, &NormalizerConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.brand, "Relyte Strawberry 16oz. w/ powder");
    }

    #[test]
    fn test_brand_comparison_without_relyte_uses_most_expensive() {
        let records = vec![
            product("Nuun Sport", "Tablet", 1.5, 300.0),
            product("Propel Berry", "RTD", 3.0, 100.0),
        ];
        let entries = brand_comparison(&records, &NormalizerConfig::default());
        assert_eq!(brands(entries.iter().map(|e| &e.record)), vec!["Propel Berry", "Nuun Sport"]);
        assert_eq!(entries[0].multiplier, "1.0x");
        assert_eq!(entries[1].multiplier, "0.5x");
    }

    #[test]
    fn test_brand_comparison_multiplier_rounds_ties_up() {
        let records = vec![
            product("Propel Berry", "RTD", 4.0, 100.0),
            product("Nuun Sport", "Tablet", 1.0, 300.0),
        ];
        let entries = brand_comparison(&records, &NormalizerConfig::default());
        assert_eq!(entries[1].multiplier, "0.3x");
    }

    #[test]
    fn test_brand_comparison_respects_limit() {
        let records = vec![
            product("Relyte", "Bulk Powder", 0.4, 800.0),
            product("LMNT", "Stick Pack", 0.9, 1000.0),
            product("Nuun", "Tablet", 1.5, 300.0),
        ];
        let config = NormalizerConfig::default().with_comparison_limit(2);
        let entries = brand_comparison(&records, &config);
        assert_eq!(brands(entries.iter().map(|e| &e.record)), vec!["Nuun", "LMNT"]);
        assert_eq!(entries[1].multiplier, "0.6x");
    }

    #[test]
    fn test_mineral_focus_selection() {
        let records = vec![
            product("Gatorade Powder", "Bulk Powder", 1.8, 110.0),
            product("Relyte Strawberry 16oz. w/ powder", "Bulk Powder", 0.38, 760.0),
            product("Gatorade Lemon Lime, RTD", "RTD", 2.0, 220.0),
            product("Mountain Ops Ignite", "Bulk Powder", 1.1, 300.0),
            product("Prime", "RTD", 4.0, 10.0),
            product("LMNT Orange", "Stick Pack", 0.62, 1000.0),
        ];

        let entries = mineral_focus(&records, &NormalizerConfig::default());
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["relyte", "gatorade", "mountain ops", "prime"]);
        assert_eq!(entries[1].record.brand, "Gatorade Powder");
        assert_eq!(entries[3].record.brand, "Prime");
    }

    #[test]
    fn test_mineral_focus_without_anchor() {
        let records = vec![product("Liquid IV Lemon", "Stick Pack", 1.9, 500.0)];
        let entries = mineral_focus(&records, &NormalizerConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "liquid iv");
    }

    #[test]
    fn test_group_by_category() {
        let records = vec![
            product("Relyte Strawberry", "Bulk Powder", 0.38, 760.0),
            product("Gatorade Powder", "Bulk Powder", 1.8, 110.0),
            product("Propel Berry", "RTD", 3.0, 100.0),
            product("LMNT Orange", "Stick Pack", 0.62, 1000.0),
            product("Nuun Sport", "Tablet", 1.5, 300.0),
        ];

        let groups = group_by_category(&records);
        assert_eq!(brands(&groups.relyte), vec!["Relyte Strawberry"]);
        assert_eq!(brands(groups.category(ProductCategory::BulkPowder)), vec!["Gatorade Powder"]);
        assert_eq!(brands(&groups.ready_to_drink), vec!["Propel Berry"]);
        assert_eq!(brands(&groups.stick_pack), vec!["LMNT Orange"]);
        assert_eq!(brands(&groups.other), vec!["Nuun Sport"]);
    }
}
