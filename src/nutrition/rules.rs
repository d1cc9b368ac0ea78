//! Dietary rule engine
//!
//! Narrows the food catalog with the filters declared by the selected
//! conditions and preferences, and looks up food-drug interactions.
//!
//! Every filter is an independent keep-predicate, so the candidate set is the
//! intersection of all of them: it never grows, repeating a filter changes
//! nothing, and the order rules are applied in does not matter.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;

use crate::models::{FilterRule, FoodItem, InteractionWarning};
use crate::reference::ReferenceData;

/// Keep the catalog items every filter keeps, in catalog order
pub fn filter_catalog(catalog: &[FoodItem], filters: &[FilterRule]) -> Vec<FoodItem> {
    catalog
        .iter()
        .filter(|item| filters.iter().all(|rule| rule.keeps(item)))
        .cloned()
        .collect()
}

/// A filter that took part in a filtering pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedFilter {
    /// Condition or preference id that declared the filter
    pub source: String,
    pub rule: FilterRule,
    pub description: String,
}

/// Result of [`DietaryRuleEngine::filter_foods`]
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    pub foods: Vec<FoodItem>,
    /// Union of the restriction tags of the active conditions
    pub restrictions: BTreeSet<String>,
    pub monitored_nutrients: BTreeSet<String>,
    pub applied_filters: Vec<AppliedFilter>,
    pub unknown_conditions: Vec<String>,
    pub unknown_preferences: Vec<String>,
}

/// Rule engine over a set of reference tables
#[derive(Debug, Clone)]
pub struct DietaryRuleEngine {
    reference: Arc<ReferenceData>,
}

impl DietaryRuleEngine {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn catalog(&self) -> &[FoodItem] {
        &self.reference.foods
    }

    /// Filter the catalog for a condition set and preference set
    ///
    /// Unknown condition or preference ids are skipped and reported in the
    /// outcome.
    pub fn filter_foods(
        &self,
        conditions: &BTreeSet<String>,
        preferences: &BTreeSet<String>,
    ) -> FilterOutcome {
        let mut restrictions = BTreeSet::new();
        let mut monitored_nutrients = BTreeSet::new();
        let mut applied_filters = Vec::new();
        let mut unknown_conditions = Vec::new();
        let mut unknown_preferences = Vec::new();

        for id in conditions {
            let Some(rule) = self.reference.condition(id) else {
                tracing::warn!("Unknown condition '{}' skipped", id);
                unknown_conditions.push(id.clone());
                continue;
            };
            restrictions.extend(rule.restrictions.iter().cloned());
            monitored_nutrients.extend(rule.monitored_nutrients.iter().cloned());
            applied_filters.extend(rule.filters.iter().map(|f| applied(&rule.id, f)));
        }

        // Labels and ids can name the same preference
        let mut matched_preferences = BTreeSet::new();
        for key in preferences {
            match self.reference.preference(key) {
                Some(pref) => {
                    if matched_preferences.insert(pref.id.as_str()) {
                        applied_filters.extend(pref.filters.iter().map(|f| applied(&pref.id, f)));
                    }
                }
                None => {
                    tracing::warn!("Unknown preference '{}' skipped", key);
                    unknown_preferences.push(key.clone());
                }
            }
        }

        let filters: Vec<FilterRule> = applied_filters.iter().map(|a| a.rule.clone()).collect();
        for filter in &applied_filters {
            tracing::debug!("Filter from {}: {}", filter.source, filter.description);
        }
        let foods = filter_catalog(&self.reference.foods, &filters);

        tracing::debug!(
            "Catalog narrowed from {} to {} items by {} filters",
            self.reference.foods.len(),
            foods.len(),
            filters.len()
        );

        FilterOutcome {
            foods,
            restrictions,
            monitored_nutrients,
            applied_filters,
            unknown_conditions,
            unknown_preferences,
        }
    }

    /// Avoid-lists for the selected medications
    ///
    /// Medications without a table entry are omitted.
    pub fn lookup_interactions<I, S>(&self, medications: I) -> BTreeMap<String, BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        medications
            .into_iter()
            .filter_map(|med| {
                let med = med.as_ref();
                self.reference
                    .avoid_list(med)
                    .map(|foods| (med.to_string(), foods.clone()))
            })
            .collect()
    }

    /// Foods in `foods` that a selected medication says to avoid
    pub fn interaction_warnings<I, S>(&self, foods: &[FoodItem], medications: I) -> Vec<InteractionWarning>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut warnings = Vec::new();
        for (medication, avoid) in self.lookup_interactions(medications) {
            for food in foods {
                if avoid.iter().any(|a| food.name_matches(a)) {
                    warnings.push(InteractionWarning {
                        medication: medication.clone(),
                        food: food.name.clone(),
                    });
                }
            }
        }
        warnings
    }
}

fn applied(source: &str, rule: &FilterRule) -> AppliedFilter {
    AppliedFilter {
        source: source.to_string(),
        rule: rule.clone(),
        description: rule.describe(),
    }
}
