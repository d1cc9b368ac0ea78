//! Nutrition plan model
//!
//! Derived, disposable result of one "generate" action.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FoodCategory, FoodItem, MacroRatios, MacroTargets};

/// Recommended food that a selected medication says to avoid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionWarning {
    pub medication: String,
    pub food: String,
}

/// Guidance text for one active condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionGuidance {
    pub condition: String,
    pub name: String,
    pub guidance: String,
}

/// A generated nutrition plan
#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlan {
    pub patient_name: Option<String>,
    /// Free-text allergies from the profile, unparsed
    pub allergies: Option<String>,
    pub daily_calories: u32,
    pub macros: MacroTargets,
    /// Ratios the macro grams were computed from
    pub ratios: MacroRatios,
    pub recommended_foods: Vec<FoodItem>,
    pub restrictions: BTreeSet<String>,
    pub monitored_nutrients: BTreeSet<String>,
    pub guidance: Vec<ConditionGuidance>,
    pub interaction_warnings: Vec<InteractionWarning>,
    pub generated_at: DateTime<Utc>,
}

impl NutritionPlan {
    /// Recommended foods grouped by category, catalog order within a group
    pub fn foods_by_category(&self) -> BTreeMap<FoodCategory, Vec<&FoodItem>> {
        let mut groups: BTreeMap<FoodCategory, Vec<&FoodItem>> = BTreeMap::new();
        for food in &self.recommended_foods {
            groups.entry(food.category).or_default().push(food);
        }
        groups
    }

    /// Whether a dish name is among the recommended foods
    pub fn recommends(&self, name: &str) -> bool {
        self.recommended_foods.iter().any(|f| f.name_matches(name))
    }
}
