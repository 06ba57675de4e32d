use serde::Serialize;
use std::path::PathBuf;
use titro_core::error::TitroError;
use titro_core::TitrationMethod;

use crate::commands::resolve_table;
use crate::output;

#[derive(Serialize)]
struct PlainOutput {
    concentration_percent: f64,
}

pub fn run(
    perm_volume: f64,
    normality: f64,
    sample_volume: f64,
    product: Option<&str>,
    products_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), TitroError> {
    match product {
        Some(key) => {
            let table = resolve_table(products_file)?;
            let spec = table
                .get(key)
                .ok_or_else(|| TitroError::UnknownProduct(key.to_string()))?;
            let assessment =
                titro_core::assess_peroxide(perm_volume, normality, sample_volume, spec)?;

            match output_format {
                "json" => output::json::print(&assessment)?,
                _ => output::table::print_assessment(&assessment),
            }
        }
        None => {
            let value =
                TitrationMethod::Peroxide.concentration(perm_volume, normality, sample_volume)?;
            match output_format {
                "json" => output::json::print(&PlainOutput {
                    concentration_percent: value,
                })?,
                _ => {
                    println!("H2O2 concentration");
                    println!("  {value:.3} %");
                }
            }
        }
    }
    Ok(())
}
