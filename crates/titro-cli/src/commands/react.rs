use titro_core::balance::ReactionKind;
use titro_core::error::TitroError;
use titro_core::model::MassUnit;

use crate::output;

pub fn run(
    reaction: &str,
    mass1: f64,
    mass2: f64,
    unit: &str,
    output_format: &str,
) -> Result<(), TitroError> {
    let kind = ReactionKind::from_str_loose(reaction).ok_or_else(|| TitroError::InvalidInput {
        field: "reaction",
        reason: format!(
            "unknown reaction '{reaction}'. Available: neutralization, chlorine_bleach, peroxide_synthesis"
        ),
    })?;

    let display_unit = MassUnit::from_str_loose(unit).ok_or_else(|| TitroError::InvalidInput {
        field: "unit",
        reason: format!("unknown unit '{unit}'. Available: kg, l, ml"),
    })?;

    let result = titro_core::balance_reaction(kind, mass1, mass2)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_reaction(&result, display_unit),
    }
    Ok(())
}
