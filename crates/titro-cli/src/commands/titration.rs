use serde::Serialize;
use titro_core::error::TitroError;

use crate::output;

#[derive(Serialize)]
struct TitrationOutput {
    concentration_mol_per_l: f64,
}

pub fn run(
    titrant_volume: f64,
    titrant_conc: f64,
    sample_volume: f64,
    output_format: &str,
) -> Result<(), TitroError> {
    let concentration = titro_core::assess_titration(titrant_volume, titrant_conc, sample_volume)?;

    match output_format {
        "json" => output::json::print(&TitrationOutput {
            concentration_mol_per_l: concentration,
        })?,
        _ => {
            println!("Sample concentration");
            println!("  {concentration:.4} mol/L");
        }
    }
    Ok(())
}
