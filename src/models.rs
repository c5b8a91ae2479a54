//! Core data structures for electrolyte product normalization.
//!
//! Defines the loosely-typed input row, the normalized product record
//! handed to presentation, and the enums classifying brands and product
//! categories.

use crate::constants::{SVG_ONLY_SLUGS, product_types};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A single untyped CSV cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Infer the cell type the way a dynamically typed CSV reader would
    ///
    /// Blank cells become `Empty`, cells that are entirely a finite number
    /// become `Number`, everything else stays `Text` verbatim.
    pub fn infer(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return RawValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => RawValue::Number(n),
            _ => RawValue::Text(cell.to_string()),
        }
    }

    /// True for cells that carry no usable value (blank, zero, or empty text)
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Number(n) => *n == 0.0 || n.is_nan(),
            RawValue::Text(s) => s.is_empty(),
        }
    }

    /// Textual form of the cell, with blank cells rendered as `"0"`
    pub fn as_text(&self) -> Cow<'_, str> {
        if self.is_blank() {
            return Cow::Borrowed("0");
        }
        match self {
            RawValue::Text(s) => Cow::Borrowed(s.as_str()),
            RawValue::Number(n) => Cow::Owned(n.to_string()),
            RawValue::Empty => Cow::Borrowed("0"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::infer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

/// One CSV line keyed by exact column name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRow {
    cells: HashMap<String, RawValue>,
}

static EMPTY_CELL: RawValue = RawValue::Empty;

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by loaders and fixtures
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Cell for `column`, or `Empty` when the column is absent
    pub fn get(&self, column: &str) -> &RawValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Canonical brand identifier derived from free-text product names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandSlug {
    #[serde(rename = "relyte")]
    Relyte,
    #[serde(rename = "lmnt")]
    Lmnt,
    #[serde(rename = "liquid-iv")]
    LiquidIv,
    #[serde(rename = "gatorade")]
    Gatorade,
    #[serde(rename = "bodyarmour")]
    Bodyarmour,
    #[serde(rename = "pedialyte")]
    Pedialyte,
    #[serde(rename = "ultima")]
    Ultima,
    #[serde(rename = "nuun")]
    Nuun,
    #[serde(rename = "propel")]
    Propel,
    #[serde(rename = "powerade")]
    Powerade,
    #[serde(rename = "electrolit")]
    Electrolit,
    #[serde(rename = "prime")]
    Prime,
    #[serde(rename = "kinderlyte")]
    Kinderlyte,
    #[serde(rename = "dripdrop")]
    DripDrop,
    #[serde(rename = "mountainops")]
    MountainOps,
    #[serde(rename = "generic")]
    Generic,
}

impl BrandSlug {
    pub const ALL: [BrandSlug; 16] = [
        BrandSlug::Relyte,
        BrandSlug::Lmnt,
        BrandSlug::LiquidIv,
        BrandSlug::Gatorade,
        BrandSlug::Bodyarmour,
        BrandSlug::Pedialyte,
        BrandSlug::Ultima,
        BrandSlug::Nuun,
        BrandSlug::Propel,
        BrandSlug::Powerade,
        BrandSlug::Electrolit,
        BrandSlug::Prime,
        BrandSlug::Kinderlyte,
        BrandSlug::DripDrop,
        BrandSlug::MountainOps,
        BrandSlug::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandSlug::Relyte => "relyte",
            BrandSlug::Lmnt => "lmnt",
            BrandSlug::LiquidIv => "liquid-iv",
            BrandSlug::Gatorade => "gatorade",
            BrandSlug::Bodyarmour => "bodyarmour",
            BrandSlug::Pedialyte => "pedialyte",
            BrandSlug::Ultima => "ultima",
            BrandSlug::Nuun => "nuun",
            BrandSlug::Propel => "propel",
            BrandSlug::Powerade => "powerade",
            BrandSlug::Electrolit => "electrolit",
            BrandSlug::Prime => "prime",
            BrandSlug::Kinderlyte => "kinderlyte",
            BrandSlug::DripDrop => "dripdrop",
            BrandSlug::MountainOps => "mountainops",
            BrandSlug::Generic => "generic",
        }
    }

    /// Whether the brand's logo only exists as an SVG asset
    pub fn is_svg_only(&self) -> bool {
        SVG_ONLY_SLUGS.contains(&self.as_str())
    }

    /// File extension of the brand's logo asset
    pub fn logo_extension(&self) -> &'static str {
        if self.is_svg_only() { "svg" } else { "png" }
    }

    /// Logo path under `logo_dir`; does not check that the file exists
    pub fn logo_path(&self, logo_dir: &str) -> String {
        format!(
            "{}/{}.{}",
            logo_dir.trim_end_matches('/'),
            self.as_str(),
            self.logo_extension()
        )
    }
}

impl fmt::Display for BrandSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandSlug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BrandSlug::ALL
            .iter()
            .copied()
            .find(|slug| slug.as_str() == wanted)
            .ok_or_else(|| format!("Unknown brand slug: '{}'", s))
    }
}

/// Product packaging category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    BulkPowder,
    ReadyToDrink,
    StickPack,
    Other,
}

impl ProductCategory {
    /// Classify the free-text `Type of Product` value (exact match)
    pub fn from_type(product_type: &str) -> Self {
        match product_type {
            product_types::BULK_POWDER => ProductCategory::BulkPowder,
            product_types::READY_TO_DRINK => ProductCategory::ReadyToDrink,
            product_types::STICK_PACK => ProductCategory::StickPack,
            _ => ProductCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::BulkPowder => product_types::BULK_POWDER,
            ProductCategory::ReadyToDrink => product_types::READY_TO_DRINK,
            ProductCategory::StickPack => product_types::STICK_PACK,
            ProductCategory::Other => "Other",
        }
    }
}

/// A normalized product, the unit consumed by charts and tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub brand: String,
    #[serde(rename = "type")]
    pub product_type: String,
    /// Cost per 1000mg of cation electrolytes, 16oz basis
    pub price_per_thousand: f64,
    /// Cation electrolytes (mg) per 16oz serving
    pub total_electrolytes: f64,
    /// Cost of a 16oz-equivalent serving
    pub price_per_serving: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub calcium: f64,
    pub magnesium: f64,
    pub brand_slug: BrandSlug,
    pub is_relyte: bool,
    pub logo_path: String,
}

impl ProductRecord {
    pub fn category(&self) -> ProductCategory {
        ProductCategory::from_type(&self.product_type)
    }

    /// Holds when the record carries both mandatory metrics
    pub fn has_valid_metrics(&self) -> bool {
        self.price_per_thousand > 0.0 && self.total_electrolytes > 0.0
    }
}
