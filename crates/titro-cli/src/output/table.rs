use titro_core::assess::ConcentrationAssessment;
use titro_core::balance::{Portion, ReactionResult};
use titro_core::model::MassUnit;

pub fn print_assessment(assessment: &ConcentrationAssessment) {
    println!("=== {} ===\n", assessment.product_name);
    println!(
        "  Concentration: {:.3} {}",
        assessment.value, assessment.unit
    );
    println!(
        "  Expected:      {} to {} {}",
        assessment.min_expected, assessment.max_expected, assessment.unit
    );

    let verdict = if assessment.in_range { "OK" } else { "OUT" };
    println!("  Verdict:       {} ({})", verdict, assessment.status);
    println!("  {}", assessment.reason);

    if let Some(ref sugg) = assessment.suggestion {
        println!();
        println!(
            "  Suggested titrant volume: {:.2} mL (targets {:.2} {})",
            sugg.suggested_volume_ml, sugg.target_concentration, assessment.unit
        );
    }
    println!();
}

pub fn print_reaction(result: &ReactionResult, unit: MassUnit) {
    println!("=== {} ===\n", result.reaction);
    println!("  Limiting reagent: {}\n", result.limiting_reagent);

    print_portions("Products", &result.products, unit);
    print_portions("Byproducts", &result.byproducts, unit);

    // Skip the limiting reagent's zero waste entry
    let waste: Vec<&Portion> = result.waste.iter().filter(|p| p.kg > 1e-12).collect();
    if waste.is_empty() {
        println!("  Waste: none (stoichiometric feed)");
    } else {
        println!("  Waste:");
        for p in &waste {
            println!("    {:<8} {:.3} {}", p.name, unit.from_kg(p.kg), unit);
        }
    }

    if let Some(ref sugg) = result.suggestion {
        println!();
        println!(
            "  Suggestion: use {:.3} {} of {} to match the stoichiometric ratio",
            unit.from_kg(sugg.suggested_kg),
            unit,
            sugg.reagent
        );
    }
    println!();
}

fn print_portions(label: &str, portions: &[Portion], unit: MassUnit) {
    if portions.is_empty() {
        return;
    }
    println!("  {label}:");
    for p in portions {
        println!("    {:<8} {:.3} {}", p.name, unit.from_kg(p.kg), unit);
    }
    println!();
}
