use crate::model::{ProductCategory, Unit};
use serde::{Deserialize, Serialize};

/// Reference data for one product category: the expected range its
/// active-ingredient concentration should fall into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Stable lookup key (e.g., "chlorine-bleach").
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Category, which selects the titration formula branch.
    pub category: ProductCategory,
    /// Lower bound of the expected range.
    pub min_expected: f64,
    /// Upper bound of the expected range.
    pub max_expected: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub note: Option<String>,
}

/// A table of product specs, builtin or loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub products: Vec<ProductSpec>,
}

impl ProductTable {
    /// Look up a product by key.
    pub fn get(&self, key: &str) -> Option<&ProductSpec> {
        self.products.iter().find(|p| p.key == key)
    }
}
