//! Reference data module
//!
//! Static rule tables: conditions, preferences, food catalog, food-drug
//! interactions and the example menu. Loaded once, then read-only.

pub mod loader;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{ConditionRule, FoodItem, MacroPolicy, PreferenceRule, SampleMeal};

pub use loader::{ReferenceError, ReferenceResult, EMBEDDED_REFERENCE};

/// Versioned set of rule tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub version: String,
    #[serde(default)]
    pub macro_policy: MacroPolicy,
    /// Table order is rule priority for macro adjustments
    pub conditions: Vec<ConditionRule>,
    #[serde(default)]
    pub preferences: Vec<PreferenceRule>,
    pub foods: Vec<FoodItem>,
    /// Medication id -> foods or substances to avoid
    #[serde(default)]
    pub interactions: BTreeMap<String, BTreeSet<String>>,
    /// General advice shown alongside any interaction lookup
    #[serde(default)]
    pub interaction_advice: Vec<String>,
    #[serde(default)]
    pub sample_menu: Vec<SampleMeal>,
}

impl ReferenceData {
    pub fn condition(&self, id: &str) -> Option<&ConditionRule> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Find a preference by id, name or alias
    pub fn preference(&self, key: &str) -> Option<&PreferenceRule> {
        self.preferences.iter().find(|p| p.matches(key))
    }

    pub fn food(&self, name: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.name_matches(name))
    }

    pub fn avoid_list(&self, medication: &str) -> Option<&BTreeSet<String>> {
        self.interactions.get(medication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let data = ReferenceData::embedded().unwrap();
        assert_eq!(
            data.condition("chronic_kidney_disease").map(|c| c.name.as_str()),
            Some("Enfermedad Renal Crónica")
        );
        assert!(data.condition("enfermedad_renal").is_none());
        assert_eq!(data.preference("Sin gluten").map(|p| p.id.as_str()), Some("gluten_free"));
        assert_eq!(data.preference("vegetarian").map(|p| p.id.as_str()), Some("vegetarian"));
        assert!(data.food("salmón").is_some());
        assert!(data.avoid_list("warfarina").unwrap().contains("espinacas"));
        assert!(data.avoid_list("aspirina").is_none());
        assert_eq!(data.interaction_advice.len(), 4);
    }

    #[test]
    fn test_every_condition_is_enforced() {
        let data = ReferenceData::embedded().unwrap();
        for condition in &data.conditions {
            assert!(!condition.filters.is_empty(), "{} has no filters", condition.id);
            assert!(!condition.restrictions.is_empty(), "{} has no restrictions", condition.id);
        }
    }
}
