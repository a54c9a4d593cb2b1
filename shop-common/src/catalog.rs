//! Catalog documents: a JSON array of product records

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::product::Product;

#[derive(Error, Debug)]
pub enum ProductError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog must be a JSON array of products")]
    NotAList,
}

/// Parse a catalog document.
///
/// Entries that are not valid product records are skipped with a warning;
/// only a document that is not a JSON array is rejected.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, ProductError> {
    let Value::Array(entries) = serde_json::from_str::<Value>(json)? else {
        return Err(ProductError::NotAList);
    };

    let total = entries.len();
    let products: Vec<Product> = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<Product>(entry) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed catalog entry");
                    None
                }
            },
        )
        .collect();

    debug!(loaded = products.len(), total, "Parsed catalog");
    Ok(products)
}
