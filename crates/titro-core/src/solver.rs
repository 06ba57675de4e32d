use crate::error::TitroError;
use crate::formula::{
    check_positive, check_sample_volume, TitrationMethod, CHLORINE_GENERIC_FACTOR,
    CHLORINE_MOLAR_MASS, MG_PER_L_PER_PERCENT, PEROXIDE_FACTOR,
};
use crate::products::schema::ProductSpec;

/// Midpoint of a product's expected range, the target the solver aims at.
pub fn target_concentration(spec: &ProductSpec) -> f64 {
    (spec.min_expected + spec.max_expected) / 2.0
}

impl TitrationMethod {
    /// Titrant volume (mL) that would produce `target` percent under the
    /// same normality and sample volume. Algebraic inverse of
    /// [`TitrationMethod::concentration`], branch for branch.
    pub fn titrant_volume_for(
        &self,
        target: f64,
        normality: f64,
        sample_volume: f64,
    ) -> Result<f64, TitroError> {
        check_positive("target", target)?;
        check_positive("normality", normality)?;
        check_sample_volume(sample_volume)?;

        Ok(match self {
            TitrationMethod::ChlorineInBleach => {
                (target * MG_PER_L_PER_PERCENT * sample_volume)
                    / (normality * CHLORINE_MOLAR_MASS * 2.0)
            }
            TitrationMethod::ChlorineGeneric => {
                (target * sample_volume) / (normality * CHLORINE_GENERIC_FACTOR)
            }
            TitrationMethod::Peroxide => (target * sample_volume) / (normality * PEROXIDE_FACTOR),
        })
    }
}
