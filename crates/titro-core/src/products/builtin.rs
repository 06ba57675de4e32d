use crate::error::TitroError;
use crate::products::schema::ProductTable;

const CLEANING_PRODUCTS_JSON: &str = include_str!("../../../../products/cleaning-products.json");

/// Load the builtin table of cleaning-product reference ranges.
pub fn builtin_table() -> Result<ProductTable, TitroError> {
    let table: ProductTable = serde_json::from_str(CLEANING_PRODUCTS_JSON)?;
    Ok(table)
}
