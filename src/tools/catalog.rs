//! Reference Catalog MCP Tools
//!
//! Read-only listings of the conditions, preferences, medications and foods
//! the assistant knows about.

use serde::Serialize;

use crate::models::{FoodCategory, FoodItem};
use crate::reference::ReferenceData;

/// Condition summary for list_conditions
#[derive(Debug, Serialize)]
pub struct ConditionSummary {
    pub id: String,
    pub name: String,
    pub restrictions: Vec<String>,
    pub monitored_nutrients: Vec<String>,
    pub guidance: String,
    pub filters: Vec<String>,
}

/// Response for list_conditions
#[derive(Debug, Serialize)]
pub struct ListConditionsResponse {
    pub conditions: Vec<ConditionSummary>,
    pub total: usize,
}

/// Preference summary for list_preferences
#[derive(Debug, Serialize)]
pub struct PreferenceSummary {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub filters: Vec<String>,
}

/// Response for list_preferences
#[derive(Debug, Serialize)]
pub struct ListPreferencesResponse {
    pub preferences: Vec<PreferenceSummary>,
    pub total: usize,
}

/// Medication with its avoid-list
#[derive(Debug, Serialize)]
pub struct MedicationSummary {
    pub id: String,
    pub avoid: Vec<String>,
}

/// Response for list_medications
#[derive(Debug, Serialize)]
pub struct ListMedicationsResponse {
    pub medications: Vec<MedicationSummary>,
    pub total: usize,
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodItem>,
    pub total: usize,
    pub category: Option<FoodCategory>,
}

pub fn list_conditions(reference: &ReferenceData) -> ListConditionsResponse {
    let conditions: Vec<ConditionSummary> = reference
        .conditions
        .iter()
        .map(|c| ConditionSummary {
            id: c.id.clone(),
            name: c.name.clone(),
            restrictions: c.restrictions.clone(),
            monitored_nutrients: c.monitored_nutrients.clone(),
            guidance: c.guidance.clone(),
            filters: c.filters.iter().map(|f| f.describe()).collect(),
        })
        .collect();
    let total = conditions.len();
    ListConditionsResponse { conditions, total }
}

pub fn list_preferences(reference: &ReferenceData) -> ListPreferencesResponse {
    let preferences: Vec<PreferenceSummary> = reference
        .preferences
        .iter()
        .map(|p| PreferenceSummary {
            id: p.id.clone(),
            name: p.name.clone(),
            aliases: p.aliases.clone(),
            filters: p.filters.iter().map(|f| f.describe()).collect(),
        })
        .collect();
    let total = preferences.len();
    ListPreferencesResponse { preferences, total }
}

pub fn list_medications(reference: &ReferenceData) -> ListMedicationsResponse {
    let medications: Vec<MedicationSummary> = reference
        .interactions
        .iter()
        .map(|(id, avoid)| MedicationSummary {
            id: id.clone(),
            avoid: avoid.iter().cloned().collect(),
        })
        .collect();
    let total = medications.len();
    ListMedicationsResponse { medications, total }
}

/// List catalog foods, optionally restricted to one category
pub fn list_foods(reference: &ReferenceData, category: Option<&str>) -> Result<ListFoodsResponse, String> {
    let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => Some(
            FoodCategory::from_str(c).ok_or_else(|| format!("Unknown food category '{}'", c))?,
        ),
        None => None,
    };

    let foods: Vec<FoodItem> = reference
        .foods
        .iter()
        .filter(|f| category.map_or(true, |c| f.category == c))
        .cloned()
        .collect();
    let total = foods.len();

    Ok(ListFoodsResponse {
        foods,
        total,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::embedded().unwrap()
    }

    #[test]
    fn test_list_conditions_describes_filters() {
        let resp = list_conditions(&reference());
        assert_eq!(resp.total, 5);
        let diabetes = resp.conditions.iter().find(|c| c.id == "diabetes").unwrap();
        assert_eq!(diabetes.filters, vec!["sugar <= 5 g".to_string()]);
    }

    #[test]
    fn test_list_preferences() {
        let resp = list_preferences(&reference());
        assert!(resp.preferences.iter().any(|p| p.id == "gluten_free"));
        assert_eq!(resp.total, resp.preferences.len());
    }

    #[test]
    fn test_list_medications_sorted() {
        let resp = list_medications(&reference());
        let ids: Vec<&str> = resp.medications.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["digoxina", "estatinas", "levotiroxina", "litio", "warfarina"]);
    }

    #[test]
    fn test_list_foods_by_category() {
        let resp = list_foods(&reference(), Some("animal_protein")).unwrap();
        assert_eq!(resp.total, 2);
        assert!(list_foods(&reference(), None).unwrap().total == 6);
        assert!(list_foods(&reference(), Some("  ")).unwrap().total == 6);
        assert!(list_foods(&reference(), Some("proteina")).is_err());
    }
}
