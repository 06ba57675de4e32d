pub mod chlorine;
pub mod mass_balance;
pub mod peroxide;
pub mod products;
pub mod react;
pub mod titration;

use std::path::PathBuf;
use titro_core::error::TitroError;
use titro_core::products::schema::ProductTable;

/// Resolve the product table for an assessment: a custom file when
/// given, the builtin table otherwise.
pub fn resolve_table(products_file: Option<PathBuf>) -> Result<ProductTable, TitroError> {
    match products_file {
        Some(path) => titro_core::products::load_table(&path),
        None => titro_core::products::builtin::builtin_table(),
    }
}
