use crate::error::TitroError;
use crate::model::{MassBalanceStatus, ProductCategory};
use serde::{Deserialize, Serialize};

/// Molar mass of chlorine, g/mol.
pub const CHLORINE_MOLAR_MASS: f64 = 35.45;

/// Combined equivalent factor for the generic active-chlorine assay
/// (thiosulfate titration, result directly in percent).
pub const CHLORINE_GENERIC_FACTOR: f64 = 3.545;

/// Equivalent factor for the permanganometric peroxide assay
/// (34.01 g/mol / 2 equivalents / 10, result in percent).
pub const PEROXIDE_FACTOR: f64 = 1.701;

/// mg/L per percent by mass at density 1 kg/L.
pub const MG_PER_L_PER_PERCENT: f64 = 10_000.0;

/// Which titration formula applies to a sample.
///
/// Selected once per assessment and threaded through both the forward
/// concentration formula and the inverse solver, so the two can never
/// disagree on the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitrationMethod {
    /// Iodometric assay for chlorine bleach: result goes through mg/L
    /// of active chlorine before conversion to percent by mass.
    ChlorineInBleach,
    /// Iodometric assay for every other chlorine-based product.
    ChlorineGeneric,
    /// Permanganometric assay for hydrogen peroxide.
    Peroxide,
}

impl TitrationMethod {
    /// Branch selection for the active-chlorine assay.
    pub fn for_chlorine(category: ProductCategory) -> TitrationMethod {
        match category {
            ProductCategory::ChlorineBleach => TitrationMethod::ChlorineInBleach,
            _ => TitrationMethod::ChlorineGeneric,
        }
    }

    /// Active-ingredient concentration in percent by mass.
    ///
    /// `titrant_volume` and `sample_volume` in mL, `normality` in N.
    pub fn concentration(
        &self,
        titrant_volume: f64,
        normality: f64,
        sample_volume: f64,
    ) -> Result<f64, TitroError> {
        check_non_negative("titrant_volume", titrant_volume)?;
        check_non_negative("normality", normality)?;
        check_sample_volume(sample_volume)?;

        Ok(match self {
            TitrationMethod::ChlorineInBleach => {
                let mg_per_l =
                    (titrant_volume * normality * CHLORINE_MOLAR_MASS * 2.0) / sample_volume;
                mg_per_l / MG_PER_L_PER_PERCENT
            }
            TitrationMethod::ChlorineGeneric => {
                (titrant_volume * normality * CHLORINE_GENERIC_FACTOR) / sample_volume
            }
            TitrationMethod::Peroxide => {
                (titrant_volume * normality * PEROXIDE_FACTOR) / sample_volume
            }
        })
    }
}

/// Sample concentration by direct titration, C1·V1 = C2·V2.
///
/// Returns mol/L for volumes in mL and titrant concentration in mol/L.
pub fn titration_concentration(
    titrant_volume: f64,
    titrant_concentration: f64,
    sample_volume: f64,
) -> Result<f64, TitroError> {
    check_non_negative("titrant_volume", titrant_volume)?;
    check_non_negative("titrant_concentration", titrant_concentration)?;
    check_sample_volume(sample_volume)?;

    Ok((titrant_volume * titrant_concentration) / sample_volume)
}

/// Mass balance over a process: inlet minus outlet, kg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MassBalance {
    pub difference_kg: f64,
    pub status: MassBalanceStatus,
}

pub fn mass_balance(mass_in: f64, mass_out: f64) -> Result<MassBalance, TitroError> {
    check_non_negative("mass_in", mass_in)?;
    check_non_negative("mass_out", mass_out)?;

    let difference_kg = mass_in - mass_out;
    let status = if difference_kg > 0.0 {
        MassBalanceStatus::Accumulation
    } else if difference_kg < 0.0 {
        MassBalanceStatus::Loss
    } else {
        MassBalanceStatus::Equilibrium
    };

    Ok(MassBalance {
        difference_kg,
        status,
    })
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), TitroError> {
    if !value.is_finite() {
        return Err(TitroError::invalid(field, format!("not a finite number: {value}")));
    }
    if value < 0.0 {
        return Err(TitroError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), TitroError> {
    if !value.is_finite() {
        return Err(TitroError::invalid(field, format!("not a finite number: {value}")));
    }
    if value <= 0.0 {
        return Err(TitroError::invalid(field, format!("must be > 0, got {value}")));
    }
    Ok(())
}

pub(crate) fn check_sample_volume(value: f64) -> Result<(), TitroError> {
    check_positive("sample_volume", value)
}
