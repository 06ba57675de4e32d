//! End-to-end scenarios exercising the public API: builtin product
//! table -> forward formula -> range classification -> suggestion.

use titro_core::balance::{balance_reaction, ReactionKind};
use titro_core::products::builtin::builtin_table;
use titro_core::{
    assess_chlorine, assess_peroxide, assess_titration, RangeStatus, TitrationMethod, TitroError,
};

// ---------------------------------------------------------------------------
// Scenario 1: plain titration (no product category)
// ---------------------------------------------------------------------------
#[test]
fn titration_basic_scenario() {
    let c = assess_titration(20.0, 0.1, 25.0).unwrap();
    assert!((c - 0.08).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Scenario 2: weak chlorine bleach, below range, corrective suggestion
// ---------------------------------------------------------------------------
#[test]
fn chlorine_bleach_below_range_with_suggestion() {
    let table = builtin_table().unwrap();
    let bleach = table.get("chlorine-bleach").unwrap();

    let a = assess_chlorine(10.0, 0.1, 5.0, bleach).unwrap();
    assert!((a.value - 0.001418).abs() < 1e-9);
    assert_eq!(a.status, RangeStatus::Below);
    assert!(!a.in_range);
    assert_eq!(a.method, TitrationMethod::ChlorineInBleach);

    let sugg = a.suggestion.expect("below-range result must suggest");
    assert_eq!(sugg.target_concentration, 6.5);

    // Round trip: the suggested titrant volume reproduces the target.
    let back = a
        .method
        .concentration(sugg.suggested_volume_ml, 0.1, 5.0)
        .unwrap();
    assert!(((back - 6.5) / 6.5).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Scenario 3: disinfectant in range, generic chlorine branch
// ---------------------------------------------------------------------------
#[test]
fn disinfectant_in_range_generic_branch() {
    let table = builtin_table().unwrap();
    let disinfectant = table.get("disinfectant").unwrap();

    // (10 * 0.1 * 3.545) / 5 = 0.709 %, inside 0.5-2.5
    let a = assess_chlorine(10.0, 0.1, 5.0, disinfectant).unwrap();
    assert_eq!(a.method, TitrationMethod::ChlorineGeneric);
    assert!((a.value - 0.709).abs() < 1e-9);
    assert!(a.in_range);
    assert!(a.suggestion.is_none());
}

// ---------------------------------------------------------------------------
// Scenario 4: peroxide bleach above range
// ---------------------------------------------------------------------------
#[test]
fn peroxide_above_range() {
    let table = builtin_table().unwrap();
    let peroxide = table.get("peroxide-bleach").unwrap();

    // (60 * 1.0 * 1.701) / 10 = 10.206 %, above 3-8
    let a = assess_peroxide(60.0, 1.0, 10.0, peroxide).unwrap();
    assert_eq!(a.status, RangeStatus::Above);

    let sugg = a.suggestion.unwrap();
    assert_eq!(sugg.target_concentration, 5.5);
    assert!(sugg.suggested_volume_ml < 60.0);
}

// ---------------------------------------------------------------------------
// Scenario 5: consecutive assessments with different categories are
// independent (no state carries across invocations)
// ---------------------------------------------------------------------------
#[test]
fn category_switch_has_no_stale_state() {
    let table = builtin_table().unwrap();
    let bleach = table.get("chlorine-bleach").unwrap();
    let multipurpose = table.get("multipurpose").unwrap();

    let first = assess_chlorine(10.0, 0.1, 5.0, bleach).unwrap();
    let second = assess_chlorine(10.0, 0.1, 5.0, multipurpose).unwrap();

    // Same inputs, different branch and verdict; the first result is
    // unaffected by the second call.
    assert_eq!(first.method, TitrationMethod::ChlorineInBleach);
    assert_eq!(second.method, TitrationMethod::ChlorineGeneric);
    assert!((second.value - 0.709).abs() < 1e-9);
    assert_ne!(first.value, second.value);

    let reference = assess_chlorine(10.0, 0.1, 5.0, bleach).unwrap();
    assert_eq!(first.value, reference.value);
    assert_eq!(first.status, reference.status);
}

// ---------------------------------------------------------------------------
// Scenario 6: reaction balancing end to end
// ---------------------------------------------------------------------------
#[test]
fn chlorine_bleach_reaction_limiting_and_suggestion() {
    let r = balance_reaction(ReactionKind::ChlorineBleach, 71.0, 160.0).unwrap();
    assert_eq!(r.limiting_reagent, "Cl2");

    let naocl = r.products.iter().find(|p| p.name == "NaOCl").unwrap();
    assert!((naocl.kg - 74.5).abs() < 1e-9);

    let naoh_waste = r.waste.iter().find(|p| p.name == "NaOH").unwrap();
    assert!((naoh_waste.kg - 80.0).abs() < 1e-9);

    let s = r.suggestion.unwrap();
    assert_eq!(s.reagent, "NaOH");
    assert!((s.suggested_kg - 80.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Scenario 7: invalid inputs never produce a result
// ---------------------------------------------------------------------------
#[test]
fn invalid_inputs_are_rejected_everywhere() {
    let table = builtin_table().unwrap();
    let bleach = table.get("chlorine-bleach").unwrap();

    assert!(matches!(
        assess_titration(10.0, 0.1, 0.0),
        Err(TitroError::InvalidInput { .. })
    ));
    assert!(matches!(
        assess_chlorine(10.0, 0.1, 0.0, bleach),
        Err(TitroError::InvalidInput { .. })
    ));
    assert!(matches!(
        assess_peroxide(10.0, 0.1, 0.0, bleach),
        Err(TitroError::InvalidInput { .. })
    ));
    assert!(matches!(
        balance_reaction(ReactionKind::Neutralization, 10.0, 0.0),
        Err(TitroError::InvalidInput { .. })
    ));
    assert!(assess_titration(f64::NAN, 0.1, 25.0).is_err());
}
