pub mod assess;
pub mod balance;
pub mod error;
pub mod formula;
pub mod model;
pub mod products;
pub mod solver;

pub use assess::{AdjustmentSuggestion, ConcentrationAssessment, RangeStatus};
pub use balance::{balance_reaction, ReactionKind, ReactionResult};
pub use error::TitroError;
pub use formula::{mass_balance, titration_concentration, MassBalance, TitrationMethod};
pub use products::schema::{ProductSpec, ProductTable};

/// Assess an active-chlorine titration against a product's expected range.
///
/// The formula branch is selected from the product category once and
/// reused for the corrective suggestion, so the two cannot diverge.
pub fn assess_chlorine(
    thio_volume: f64,
    normality: f64,
    sample_volume: f64,
    spec: &ProductSpec,
) -> Result<ConcentrationAssessment, TitroError> {
    let method = TitrationMethod::for_chlorine(spec.category);
    assess::assess(method, thio_volume, normality, sample_volume, spec)
}

/// Assess a permanganometric peroxide titration against a product's
/// expected range.
pub fn assess_peroxide(
    permanganate_volume: f64,
    normality: f64,
    sample_volume: f64,
    spec: &ProductSpec,
) -> Result<ConcentrationAssessment, TitroError> {
    assess::assess(
        TitrationMethod::Peroxide,
        permanganate_volume,
        normality,
        sample_volume,
        spec,
    )
}

/// Plain titration concentration (mol/L). The original calculator has
/// no product category, so there is no range verdict to attach.
pub fn assess_titration(
    titrant_volume: f64,
    titrant_concentration: f64,
    sample_volume: f64,
) -> Result<f64, TitroError> {
    titration_concentration(titrant_volume, titrant_concentration, sample_volume)
}
