//! Patient model
//!
//! Per-request patient input. Built by the caller from form data and never
//! mutated once handed to the estimators.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ActivityLevel;

/// Biometric and clinical input for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: Option<String>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Selected condition ids
    #[serde(default)]
    pub conditions: BTreeSet<String>,
    /// Selected medication ids
    #[serde(default)]
    pub medications: BTreeSet<String>,
    /// Dietary preference ids or labels
    #[serde(default)]
    pub preferences: BTreeSet<String>,
    /// Free-text allergies, carried through untouched
    #[serde(default)]
    pub allergies: Option<String>,
}

impl PatientProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, activity_level: ActivityLevel) -> Self {
        Self {
            name: None,
            weight_kg,
            height_cm,
            age_years,
            activity_level,
            conditions: BTreeSet::new(),
            medications: BTreeSet::new(),
            preferences: BTreeSet::new(),
            allergies: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions.extend(conditions.into_iter().map(Into::into));
        self
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications.extend(medications.into_iter().map(Into::into));
        self
    }

    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences.extend(preferences.into_iter().map(Into::into));
        self
    }

    pub fn with_allergies(mut self, allergies: impl Into<String>) -> Self {
        self.allergies = Some(allergies.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_sets() {
        let profile = PatientProfile::new(70.0, 170.0, 30, ActivityLevel::Moderate)
            .with_name("Ana")
            .with_conditions(["diabetes", "hypertension", "diabetes"])
            .with_medications(["warfarina"])
            .with_preferences(["Sin gluten"]);

        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert_eq!(profile.conditions.len(), 2);
        assert!(profile.medications.contains("warfarina"));
        assert!(profile.preferences.contains("Sin gluten"));
        assert!(profile.allergies.is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{ "name": null, "weight_kg": 70.0, "height_cm": 170.0, "age_years": 30 }"#;
        let profile: PatientProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert!(profile.conditions.is_empty());
    }
}
