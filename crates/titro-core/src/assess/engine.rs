use crate::assess::outcome::{AdjustmentSuggestion, ConcentrationAssessment, RangeStatus};
use crate::error::TitroError;
use crate::formula::TitrationMethod;
use crate::products::schema::ProductSpec;
use crate::solver;

/// Compare a computed concentration against a product's expected range.
pub fn classify_range(value: f64, spec: &ProductSpec) -> RangeStatus {
    if value < spec.min_expected {
        RangeStatus::Below
    } else if value > spec.max_expected {
        RangeStatus::Above
    } else {
        RangeStatus::InRange
    }
}

/// Run the full assessment pipeline for one titration: forward formula,
/// range classification, and (for out-of-range results) the inverse
/// solver's corrective titrant volume.
///
/// `method` must be the branch the caller selected for this product;
/// it is reused for the suggestion so forward and inverse always agree.
pub fn assess(
    method: TitrationMethod,
    titrant_volume: f64,
    normality: f64,
    sample_volume: f64,
    spec: &ProductSpec,
) -> Result<ConcentrationAssessment, TitroError> {
    let value = method.concentration(titrant_volume, normality, sample_volume)?;
    let status = classify_range(value, spec);

    let reason = match status {
        RangeStatus::InRange => format!(
            "{}: {value:.4} {} within expected {}-{} {}",
            spec.name, spec.unit, spec.min_expected, spec.max_expected, spec.unit
        ),
        RangeStatus::Below => format!(
            "{}: {value:.4} {} below expected minimum {} {}",
            spec.name, spec.unit, spec.min_expected, spec.unit
        ),
        RangeStatus::Above => format!(
            "{}: {value:.4} {} above expected maximum {} {}",
            spec.name, spec.unit, spec.max_expected, spec.unit
        ),
    };

    let suggestion = if status.in_range() {
        None
    } else {
        let target = solver::target_concentration(spec);
        let suggested_volume_ml = method.titrant_volume_for(target, normality, sample_volume)?;
        Some(AdjustmentSuggestion {
            target_concentration: target,
            suggested_volume_ml,
        })
    };

    Ok(ConcentrationAssessment {
        value,
        product_key: spec.key.clone(),
        product_name: spec.name.clone(),
        category: spec.category,
        method,
        unit: spec.unit,
        min_expected: spec.min_expected,
        max_expected: spec.max_expected,
        in_range: status.in_range(),
        status,
        reason,
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCategory, Unit};

    fn spec(key: &str, category: ProductCategory, min: f64, max: f64) -> ProductSpec {
        ProductSpec {
            key: key.into(),
            name: key.into(),
            category,
            min_expected: min,
            max_expected: max,
            unit: Unit::Percent,
            note: None,
        }
    }

    #[test]
    fn test_classify_in_range() {
        let s = spec("bleach", ProductCategory::ChlorineBleach, 3.0, 10.0);
        assert_eq!(classify_range(6.5, &s), RangeStatus::InRange);
        // Bounds are inclusive
        assert_eq!(classify_range(3.0, &s), RangeStatus::InRange);
        assert_eq!(classify_range(10.0, &s), RangeStatus::InRange);
    }

    #[test]
    fn test_classify_below_and_above() {
        let s = spec("bleach", ProductCategory::ChlorineBleach, 3.0, 10.0);
        assert_eq!(classify_range(2.9, &s), RangeStatus::Below);
        assert_eq!(classify_range(10.1, &s), RangeStatus::Above);
    }

    #[test]
    fn test_assess_in_range_has_no_suggestion() {
        let s = spec("disinfectant", ProductCategory::Disinfectant, 0.5, 2.5);
        // Generic formula: (10 * 0.1 * 3.545) / 5 = 0.709
        let a = assess(TitrationMethod::ChlorineGeneric, 10.0, 0.1, 5.0, &s).unwrap();
        assert!(a.in_range);
        assert_eq!(a.status, RangeStatus::InRange);
        assert!(a.suggestion.is_none());
        assert!(a.reason.contains("within expected"));
    }

    #[test]
    fn test_assess_below_range_spec_scenario() {
        // Spec scenario: 10 mL x 0.1 N into 5 mL bleach -> 0.001418 %,
        // far below the 3-10 range; target is the 6.5 midpoint.
        let s = spec("bleach", ProductCategory::ChlorineBleach, 3.0, 10.0);
        let a = assess(TitrationMethod::ChlorineInBleach, 10.0, 0.1, 5.0, &s).unwrap();
        assert!(!a.in_range);
        assert_eq!(a.status, RangeStatus::Below);

        let sugg = a.suggestion.expect("out-of-range result must suggest");
        assert_eq!(sugg.target_concentration, 6.5);
        let expected = (6.5 * 10_000.0 * 5.0) / (0.1 * 35.45 * 2.0);
        assert!((sugg.suggested_volume_ml - expected).abs() < 1e-9);
    }

    #[test]
    fn test_assess_suggestion_round_trips() {
        let s = spec("peroxide", ProductCategory::PeroxideBleach, 3.0, 8.0);
        let a = assess(TitrationMethod::Peroxide, 1.0, 0.1, 25.0, &s).unwrap();
        let sugg = a.suggestion.unwrap();
        let back = TitrationMethod::Peroxide
            .concentration(sugg.suggested_volume_ml, 0.1, 25.0)
            .unwrap();
        assert!(((back - sugg.target_concentration) / sugg.target_concentration).abs() < 1e-9);
    }

    #[test]
    fn test_assess_above_range() {
        let s = spec("multipurpose", ProductCategory::Multipurpose, 0.2, 1.0);
        // (50 * 0.1 * 3.545) / 5 = 3.545 -> above
        let a = assess(TitrationMethod::ChlorineGeneric, 50.0, 0.1, 5.0, &s).unwrap();
        assert_eq!(a.status, RangeStatus::Above);
        let sugg = a.suggestion.unwrap();
        assert!(sugg.suggested_volume_ml < 50.0);
    }

    #[test]
    fn test_assess_propagates_invalid_input() {
        let s = spec("bleach", ProductCategory::ChlorineBleach, 3.0, 10.0);
        assert!(matches!(
            assess(TitrationMethod::ChlorineInBleach, 10.0, 0.1, 0.0, &s),
            Err(TitroError::InvalidInput { .. })
        ));
    }
}
