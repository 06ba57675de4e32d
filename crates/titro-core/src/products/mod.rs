pub mod builtin;
pub mod schema;

use crate::error::TitroError;
use schema::ProductTable;
use std::collections::HashSet;
use std::path::Path;

/// Load a product table from a JSON file.
pub fn load_table(path: &Path) -> Result<ProductTable, TitroError> {
    let content = std::fs::read_to_string(path).map_err(|e| TitroError::ProductTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a product table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<ProductTable, TitroError> {
    let table: ProductTable =
        serde_json::from_str(json).map_err(|e| TitroError::ProductTableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a product table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<ProductTable, TitroError> {
    let table: ProductTable = serde_json::from_str(json).map_err(TitroError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a product table is well-formed.
pub fn validate_table(table: &ProductTable) -> Result<(), TitroError> {
    if table.products.is_empty() {
        return Err(TitroError::ProductTableInvalid(
            "products must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for product in &table.products {
        if product.key.is_empty() {
            return Err(TitroError::ProductTableInvalid(
                "product key must not be empty".into(),
            ));
        }
        if !seen.insert(product.key.as_str()) {
            return Err(TitroError::ProductTableInvalid(format!(
                "duplicate product key '{}'",
                product.key
            )));
        }
        if !product.min_expected.is_finite() || !product.max_expected.is_finite() {
            return Err(TitroError::ProductTableInvalid(format!(
                "product '{}' has a non-finite range bound",
                product.key
            )));
        }
        if product.min_expected < 0.0 {
            return Err(TitroError::ProductTableInvalid(format!(
                "product '{}' has negative min_expected {}",
                product.key, product.min_expected
            )));
        }
        if product.min_expected >= product.max_expected {
            return Err(TitroError::ProductTableInvalid(format!(
                "product '{}' has min_expected {} >= max_expected {}",
                product.key, product.min_expected, product.max_expected
            )));
        }
    }

    Ok(())
}
