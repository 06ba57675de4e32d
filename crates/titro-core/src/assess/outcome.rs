use crate::formula::TitrationMethod;
use crate::model::{ProductCategory, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a concentration sits relative to a product's expected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    InRange,
    Below,
    Above,
}

impl RangeStatus {
    pub fn in_range(&self) -> bool {
        matches!(self, RangeStatus::InRange)
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeStatus::InRange => write!(f, "in range"),
            RangeStatus::Below => write!(f, "below range"),
            RangeStatus::Above => write!(f, "above range"),
        }
    }
}

/// Corrective input suggested when a result falls outside the range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjustmentSuggestion {
    /// Midpoint of the expected range the suggestion aims at.
    pub target_concentration: f64,
    /// Titrant volume (mL) that would have produced the target under
    /// the same normality and sample volume.
    pub suggested_volume_ml: f64,
}

/// Full assessment of a titration result against a product spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentrationAssessment {
    /// Computed concentration.
    pub value: f64,
    /// Key of the product spec the value was assessed against.
    pub product_key: String,
    /// Human-readable product name.
    pub product_name: String,
    pub category: ProductCategory,
    /// Formula branch used; the suggestion (if any) used the same one.
    pub method: TitrationMethod,
    pub unit: Unit,
    pub min_expected: f64,
    pub max_expected: f64,
    pub status: RangeStatus,
    pub in_range: bool,
    /// Human-readable explanation of the verdict.
    pub reason: String,
    /// Present only when the result is out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<AdjustmentSuggestion>,
}
