use std::path::Path;
use titro_core::error::TitroError;
use titro_core::model::ProductCategory;
use titro_core::products::builtin::builtin_table;
use titro_core::TitrationMethod;

pub fn list() -> Result<(), TitroError> {
    let table = builtin_table()?;

    println!("{} (v{})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        println!("{desc}\n");
    }

    let max_key = table
        .products
        .iter()
        .map(|p| p.key.len())
        .max()
        .unwrap_or(12);

    for product in &table.products {
        println!(
            "  {:<width$}  {} ({}-{} {})",
            product.key,
            product.name,
            product.min_expected,
            product.max_expected,
            product.unit,
            width = max_key
        );
    }
    println!();
    Ok(())
}

pub fn explain(key: &str) -> Result<(), TitroError> {
    let table = builtin_table()?;
    let product = table
        .get(key)
        .ok_or_else(|| TitroError::UnknownProduct(key.to_string()))?;

    println!("{}\n", product.name);
    println!("  Category:       {}", product.category);
    println!(
        "  Expected range: {} to {} {}",
        product.min_expected, product.max_expected, product.unit
    );

    let method = match product.category {
        ProductCategory::PeroxideBleach => TitrationMethod::Peroxide,
        cat => TitrationMethod::for_chlorine(cat),
    };
    let formula = match method {
        TitrationMethod::ChlorineInBleach => {
            "((V_thio x N x 35.45 x 2) / V_sample) / 10000  [via mg/L]"
        }
        TitrationMethod::ChlorineGeneric => "(V_thio x N x 3.545) / V_sample",
        TitrationMethod::Peroxide => "(V_perm x N x 1.701) / V_sample",
    };
    println!("  Formula:        {formula}");

    if let Some(ref note) = product.note {
        println!("  Note:           {note}");
    }
    println!();
    println!("Out-of-range results come with a suggested titrant volume that");
    println!("targets the midpoint of the expected range, inverted from the");
    println!("same formula branch.");
    println!();
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), TitroError> {
    let table = titro_core::products::load_table(file)?;

    println!("Product table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Products: {}", table.products.len());

    // Warn about ranges that look off (warnings, not errors)
    let mut warnings = Vec::new();
    for product in &table.products {
        if product.max_expected > 100.0 {
            warnings.push(format!(
                "product '{}' has max_expected {} above 100 %",
                product.key, product.max_expected
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
