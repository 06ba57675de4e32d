use titro_core::error::TitroError;

use crate::output;

pub fn run(mass_in: f64, mass_out: f64, output_format: &str) -> Result<(), TitroError> {
    let balance = titro_core::mass_balance(mass_in, mass_out)?;

    match output_format {
        "json" => output::json::print(&balance)?,
        _ => {
            println!("Mass difference");
            println!("  {:.3} kg ({})", balance.difference_kg, balance.status);
        }
    }
    Ok(())
}
