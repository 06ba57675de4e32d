use crate::error::TitroError;
use crate::formula::check_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total waste (kg) above which a corrective reagent ratio is suggested.
pub const WASTE_SUGGESTION_THRESHOLD_KG: f64 = 1.0;

/// Supported reaction categories. Stoichiometric constants are fixed
/// per kind, not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Neutralization,
    ChlorineBleach,
    PeroxideSynthesis,
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionKind::Neutralization => write!(f, "acid-base neutralization"),
            ReactionKind::ChlorineBleach => write!(f, "chlorine bleach synthesis"),
            ReactionKind::PeroxideSynthesis => write!(f, "peroxide synthesis"),
        }
    }
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 3] = [
        ReactionKind::Neutralization,
        ReactionKind::ChlorineBleach,
        ReactionKind::PeroxideSynthesis,
    ];

    pub fn from_str_loose(s: &str) -> Option<ReactionKind> {
        let lower = s.trim().to_lowercase();
        if lower.contains("neutral") {
            Some(ReactionKind::Neutralization)
        } else if lower.contains("chlorine") || lower.contains("bleach") {
            Some(ReactionKind::ChlorineBleach)
        } else if lower.contains("perox") {
            Some(ReactionKind::PeroxideSynthesis)
        } else {
            None
        }
    }

    pub fn spec(&self) -> &'static ReactionSpec {
        match self {
            ReactionKind::Neutralization => &NEUTRALIZATION,
            ReactionKind::ChlorineBleach => &CHLORINE_BLEACH,
            ReactionKind::PeroxideSynthesis => &PEROXIDE_SYNTHESIS,
        }
    }
}

/// One chemical species with its mass ratio per unit of limiting reagent.
#[derive(Debug, Clone, Copy)]
pub struct Species {
    pub name: &'static str,
    pub ratio: f64,
}

/// Fixed stoichiometric description of a reaction.
#[derive(Debug, Clone, Copy)]
pub struct ReactionSpec {
    pub name: &'static str,
    pub reagents: [Species; 2],
    pub products: &'static [Species],
    pub byproducts: &'static [Species],
}

static NEUTRALIZATION: ReactionSpec = ReactionSpec {
    name: "HCl + NaOH -> NaCl + H2O",
    reagents: [
        Species { name: "HCl", ratio: 36.5 },
        Species { name: "NaOH", ratio: 40.0 },
    ],
    products: &[
        Species { name: "NaCl", ratio: 58.5 },
        Species { name: "H2O", ratio: 18.0 },
    ],
    byproducts: &[],
};

static CHLORINE_BLEACH: ReactionSpec = ReactionSpec {
    name: "Cl2 + 2 NaOH -> NaOCl + NaCl + H2O",
    reagents: [
        Species { name: "Cl2", ratio: 71.0 },
        Species { name: "NaOH", ratio: 80.0 },
    ],
    products: &[Species { name: "NaOCl", ratio: 74.5 }],
    byproducts: &[
        Species { name: "NaCl", ratio: 58.5 },
        Species { name: "H2O", ratio: 18.0 },
    ],
};

// The 10% water side-yield (18 * 0.1) is a fixed illustrative constant,
// not a balanced-equation figure; see DESIGN.md.
static PEROXIDE_SYNTHESIS: ReactionSpec = ReactionSpec {
    name: "H2 + O2 -> H2O2",
    reagents: [
        Species { name: "H2", ratio: 4.0 },
        Species { name: "O2", ratio: 32.0 },
    ],
    products: &[Species { name: "H2O2", ratio: 34.0 }],
    byproducts: &[Species { name: "H2O", ratio: 1.8 }],
};

/// A named quantity in a reaction result, kg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portion {
    pub name: String,
    pub kg: f64,
}

/// Suggested reagent mass that would remove the excess waste.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteSuggestion {
    /// Reagent whose supplied mass should change.
    pub reagent: String,
    /// Mass (kg) matching the other reagent's stoichiometric proportion.
    pub suggested_kg: f64,
}

/// Outcome of balancing one reaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResult {
    pub reaction: ReactionKind,
    pub limiting_reagent: String,
    pub products: Vec<Portion>,
    pub byproducts: Vec<Portion>,
    /// Unreacted supply per reagent, `max(0, supplied - consumed)`.
    pub waste: Vec<Portion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<WasteSuggestion>,
}

impl ReactionResult {
    pub fn total_waste_kg(&self) -> f64 {
        self.waste.iter().map(|p| p.kg).sum()
    }
}

/// Limiting-reagent calculation for the given reaction kind.
///
/// `limiting = min(m1/r1, m2/r2)`; each output species yields
/// `limiting * ratio`. Both masses in kg and strictly positive.
pub fn balance_reaction(
    kind: ReactionKind,
    mass1: f64,
    mass2: f64,
) -> Result<ReactionResult, TitroError> {
    check_positive("mass1", mass1)?;
    check_positive("mass2", mass2)?;

    let spec = kind.spec();
    let [reagent1, reagent2] = spec.reagents;

    let units1 = mass1 / reagent1.ratio;
    let units2 = mass2 / reagent2.ratio;
    let limiting = units1.min(units2);
    let limiting_reagent = if units1 <= units2 {
        reagent1.name
    } else {
        reagent2.name
    };

    let portions = |species: &'static [Species]| -> Vec<Portion> {
        species
            .iter()
            .map(|s| Portion {
                name: s.name.to_string(),
                kg: limiting * s.ratio,
            })
            .collect()
    };

    let waste = vec![
        Portion {
            name: reagent1.name.to_string(),
            kg: (mass1 - limiting * reagent1.ratio).max(0.0),
        },
        Portion {
            name: reagent2.name.to_string(),
            kg: (mass2 - limiting * reagent2.ratio).max(0.0),
        },
    ];

    let mut result = ReactionResult {
        reaction: kind,
        limiting_reagent: limiting_reagent.to_string(),
        products: portions(spec.products),
        byproducts: portions(spec.byproducts),
        waste,
        suggestion: None,
    };

    if result.total_waste_kg() > WASTE_SUGGESTION_THRESHOLD_KG {
        result.suggestion = Some(suggest_ratio(spec, mass1, mass2));
    }

    Ok(result)
}

/// One-shot proportional correction: scale the excess reagent down to
/// the other reagent's exact stoichiometric proportion.
fn suggest_ratio(spec: &ReactionSpec, mass1: f64, mass2: f64) -> WasteSuggestion {
    let [reagent1, reagent2] = spec.reagents;
    if mass1 / reagent1.ratio > mass2 / reagent2.ratio {
        WasteSuggestion {
            reagent: reagent1.name.to_string(),
            suggested_kg: mass2 * (reagent1.ratio / reagent2.ratio),
        }
    } else {
        WasteSuggestion {
            reagent: reagent2.name.to_string(),
            suggested_kg: mass1 * (reagent2.ratio / reagent1.ratio),
        }
    }
}
