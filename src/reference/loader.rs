//! Reference data loading
//!
//! Reads the rule tables from the embedded asset or a JSON file and checks
//! them once before they are shared.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ReferenceData;
use crate::models::{FilterRule, MacroRatios};

/// Tables compiled into the binary
pub const EMBEDDED_REFERENCE: &str = include_str!("../../data/reference.json");

/// Reference data error types
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reference data parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid reference data: {0}")]
    Invalid(String),
}

/// Result type for reference data operations
pub type ReferenceResult<T> = Result<T, ReferenceError>;

impl ReferenceData {
    /// Parse and validate the embedded tables
    pub fn embedded() -> ReferenceResult<Self> {
        Self::from_json(EMBEDDED_REFERENCE)
    }

    /// Parse and validate tables from a JSON string
    pub fn from_json(json: &str) -> ReferenceResult<Self> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Parse and validate tables from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReferenceResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&json)?;
        tracing::info!(
            "Loaded reference data {} from {}",
            data.version,
            path.display()
        );
        Ok(data)
    }

    /// Load from `path` when given, otherwise the embedded tables
    pub fn load(path: Option<&Path>) -> ReferenceResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    /// Check table integrity
    pub fn validate(&self) -> ReferenceResult<()> {
        if self.version.trim().is_empty() {
            return Err(invalid("version cannot be empty"));
        }

        check_ratios("macro_policy.base", &self.macro_policy.base)?;

        let mut condition_ids = HashSet::new();
        for condition in &self.conditions {
            if condition.id.trim().is_empty() {
                return Err(invalid("condition id cannot be empty"));
            }
            if !condition_ids.insert(condition.id.as_str()) {
                return Err(invalid(format!("duplicate condition id '{}'", condition.id)));
            }
            check_filters(&format!("condition '{}'", condition.id), &condition.filters)?;
            if let Some(adj) = &condition.macro_adjustment {
                if adj.values().any(|v| !v.is_finite() || !(0.0..=1.0).contains(&v)) {
                    return Err(invalid(format!(
                        "condition '{}' has a macro ratio outside [0, 1]",
                        condition.id
                    )));
                }
            }
        }

        let mut preference_ids = HashSet::new();
        for preference in &self.preferences {
            if preference.id.trim().is_empty() {
                return Err(invalid("preference id cannot be empty"));
            }
            if !preference_ids.insert(preference.id.as_str()) {
                return Err(invalid(format!("duplicate preference id '{}'", preference.id)));
            }
            check_filters(&format!("preference '{}'", preference.id), &preference.filters)?;
        }

        let mut food_names = HashSet::new();
        for food in &self.foods {
            let key = food.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(invalid("food name cannot be empty"));
            }
            if !food_names.insert(key) {
                return Err(invalid(format!("duplicate food '{}'", food.name)));
            }
            if let Some((nutrient, _)) = food
                .nutrition
                .columns()
                .into_iter()
                .find(|(_, v)| !v.is_finite() || *v < 0.0)
            {
                return Err(invalid(format!(
                    "food '{}' has an invalid {} value",
                    food.name,
                    nutrient.as_str()
                )));
            }
        }

        for medication in self.interactions.keys() {
            if medication.trim().is_empty() {
                return Err(invalid("interaction medication id cannot be empty"));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ReferenceError {
    ReferenceError::Invalid(msg.into())
}

fn check_ratios(label: &str, ratios: &MacroRatios) -> ReferenceResult<()> {
    let all = [ratios.protein, ratios.carbs, ratios.fat];
    if all.iter().any(|v| !v.is_finite() || !(0.0..=1.0).contains(v)) {
        return Err(invalid(format!("{} has a ratio outside [0, 1]", label)));
    }
    Ok(())
}

fn check_filters(label: &str, filters: &[FilterRule]) -> ReferenceResult<()> {
    for filter in filters {
        if let FilterRule::Threshold { limit, .. } = filter {
            if !limit.is_finite() || *limit < 0.0 {
                return Err(invalid(format!(
                    "{} has an invalid threshold limit {}",
                    label, limit
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_loads() {
        let data = ReferenceData::embedded().unwrap();
        assert_eq!(data.conditions.len(), 5);
        assert_eq!(data.foods.len(), 6);
        assert_eq!(data.interactions.len(), 5);
        assert_eq!(data.sample_menu.len(), 4);
        assert!(!data.macro_policy.renormalize);
    }

    #[test]
    fn test_load_without_path_is_embedded() {
        let data = ReferenceData::load(None).unwrap();
        assert_eq!(data.version, ReferenceData::embedded().unwrap().version);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ReferenceData::from_path("/nonexistent/tda/reference.json").unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ReferenceData::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ReferenceError::Parse(_)));
    }

    #[test]
    fn test_duplicate_condition_rejected() {
        let json = r#"{
            "version": "t",
            "conditions": [ { "id": "a", "name": "A" }, { "id": "a", "name": "A2" } ],
            "foods": []
        }"#;
        let err = ReferenceData::from_json(json).unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(msg) if msg.contains("duplicate condition")));
    }

    #[test]
    fn test_duplicate_food_rejected_case_insensitive() {
        let json = r#"{
            "version": "t",
            "conditions": [],
            "foods": [
                { "name": "Manzana", "category": "fruit", "nutrition": { "calories": 1, "protein": 0, "carbs": 0, "fat": 0 } },
                { "name": "manzana", "category": "fruit", "nutrition": { "calories": 1, "protein": 0, "carbs": 0, "fat": 0 } }
            ]
        }"#;
        assert!(matches!(
            ReferenceData::from_json(json),
            Err(ReferenceError::Invalid(_))
        ));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let json = r#"{
            "version": "t",
            "conditions": [ {
                "id": "a", "name": "A",
                "filters": [ { "type": "threshold", "nutrient": "sugar", "op": "at_most", "limit": -1 } ]
            } ],
            "foods": []
        }"#;
        assert!(matches!(
            ReferenceData::from_json(json),
            Err(ReferenceError::Invalid(_))
        ));
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let json = r#"{
            "version": "t",
            "conditions": [ { "id": "a", "name": "A", "macro_adjustment": { "carbs": 1.5 } } ],
            "foods": []
        }"#;
        assert!(matches!(
            ReferenceData::from_json(json),
            Err(ReferenceError::Invalid(_))
        ));
    }
}
