//! Product records as they arrive from the catalog
//!
//! Every field the card derives text from is optional, and every derivation
//! below is defined for the absent case.

use std::collections::HashSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Catalog identifiers show up as either JSON strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Opaque product identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variant identifier, same wire shapes as [`ProductId`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct VariantId(String);

impl VariantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for VariantId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

/// Customer rating summary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    #[serde(default)]
    pub count: Option<u32>,
}

/// A purchasable sub-option of a product (size, color, ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: Option<VariantId>,
    pub name: String,
    /// Price delta on top of the product price
    #[serde(default)]
    pub price: Option<f64>,
}

impl Variant {
    /// Value used for this variant's `<option>`: its id, or its position
    pub fn option_value(&self, index: usize) -> String {
        match &self.id {
            Some(id) if !id.as_str().is_empty() => id.as_str().to_string(),
            _ => index.to_string(),
        }
    }

    /// Delta that actually applies; zero and NaN count as no delta
    pub fn price_delta(&self) -> Option<f64> {
        self.price.filter(|p| *p != 0.0 && !p.is_nan())
    }

    /// Option label, e.g. `Large (+$5)`
    pub fn label(&self) -> String {
        match self.price_delta() {
            Some(delta) => format!("{} (+${})", self.name, delta),
            None => self.name.clone(),
        }
    }
}

/// Whether a product can currently be purchased
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

/// Product record, read-only to the views that draw it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<Rating>,
    #[serde(default, deserialize_with = "skip_malformed_variants")]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Minimal record with every optional field absent
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            title: None,
            description: None,
            image: None,
            price: None,
            original_price: None,
            category: None,
            stock: None,
            available: None,
            rating: None,
            variants: Vec::new(),
        }
    }

    /// Out of stock when stock is exactly zero or the record is flagged unavailable
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == Some(0) || self.available == Some(false)
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_out_of_stock() {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }

    /// The original price is only worth striking through when it is strictly higher
    pub fn shows_original_price(&self) -> bool {
        self.shows_original_price_for(None)
    }

    /// Same rule, measured against the price with `variant` applied
    pub fn shows_original_price_for(&self, variant: Option<&Variant>) -> bool {
        matches!(
            (self.original_price, self.effective_price(variant)),
            (Some(original), Some(price)) if original > price
        )
    }

    /// Route of the product detail view
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Image to display, if the record carries a usable one
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// `<option>` values for the variants, in order.
    ///
    /// Each is the variant's id, or its position when it has none. If that
    /// would give two options the same value, every option uses its position.
    pub fn variant_option_values(&self) -> Vec<String> {
        let values: Vec<String> = self
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| variant.option_value(index))
            .collect();

        let mut seen = HashSet::new();
        if values.iter().all(|value| seen.insert(value.as_str())) {
            values
        } else {
            (0..self.variants.len()).map(|i| i.to_string()).collect()
        }
    }

    /// Position of the variant whose option value is `value`
    pub fn variant_index(&self, value: &str) -> Option<usize> {
        self.variant_option_values()
            .iter()
            .position(|candidate| candidate == value)
    }

    /// Price including the delta of the selected variant
    pub fn effective_price(&self, variant: Option<&Variant>) -> Option<f64> {
        let delta = variant.and_then(Variant::price_delta).unwrap_or(0.0);
        self.price.map(|price| price + delta)
    }
}

/// Deserialize an optional field, treating a malformed value as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(error = %e, "Ignoring malformed {}", std::any::type_name::<T>());
                None
            }
        },
    })
}

/// Keep well-formed variants, dropping (and logging) the rest
fn skip_malformed_variants<'de, D>(deserializer: D) -> Result<Vec<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let items = match raw {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(value = %other, "Ignoring variants that are not a list");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<Variant>(item) {
                Ok(variant) => Some(variant),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed variant");
                    None
                }
            },
        )
        .collect())
}
