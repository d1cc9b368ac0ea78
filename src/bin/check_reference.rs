//! Utility to validate a reference data file and print its contents

use std::path::PathBuf;

use tda::reference::ReferenceData;

fn get_reference_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TDA_REFERENCE_PATH").ok())
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = get_reference_path();
    match &path {
        Some(p) => println!("Reference file: {}", p.display()),
        None => println!("Reference file: embedded"),
    }

    let data = ReferenceData::load(path.as_deref())?;

    println!("Version: {}", data.version);
    println!(
        "Macro base: protein {:.2} / carbs {:.2} / fat {:.2} (renormalize: {})",
        data.macro_policy.base.protein,
        data.macro_policy.base.carbs,
        data.macro_policy.base.fat,
        data.macro_policy.renormalize
    );

    println!("Conditions ({}):", data.conditions.len());
    for condition in &data.conditions {
        let filters: Vec<String> = condition.filters.iter().map(|f| f.describe()).collect();
        println!("  {} - {} [{}]", condition.id, condition.name, filters.join(", "));
    }

    println!("Preferences ({}):", data.preferences.len());
    for preference in &data.preferences {
        let filters: Vec<String> = preference.filters.iter().map(|f| f.describe()).collect();
        println!("  {} - {} [{}]", preference.id, preference.name, filters.join(", "));
    }

    println!("Foods ({}):", data.foods.len());
    for food in &data.foods {
        println!(
            "  {} ({}) {} kcal{}",
            food.name,
            food.category.as_str(),
            food.nutrition.calories,
            if food.gluten { ", gluten" } else { "" }
        );
    }

    println!("Medications ({}):", data.interactions.len());
    for (medication, avoid) in &data.interactions {
        let avoid: Vec<&str> = avoid.iter().map(String::as_str).collect();
        println!("  {}: {}", medication, avoid.join(", "));
    }

    println!("OK");
    Ok(())
}
