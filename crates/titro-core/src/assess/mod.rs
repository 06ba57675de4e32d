pub mod engine;
pub mod outcome;

pub use engine::{assess, classify_range};
pub use outcome::{AdjustmentSuggestion, ConcentrationAssessment, RangeStatus};
