//! Condition and preference rules
//!
//! Static rows of the reference tables. A condition declares restriction tags
//! for display plus the filters that enforce them; a preference only filters.

use serde::{Deserialize, Serialize};

use super::{FilterRule, MacroAdjustment};

/// Diagnosed condition with its dietary rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    pub id: String,
    pub name: String,
    /// Nutrient or substance tags the condition limits
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub monitored_nutrients: Vec<String>,
    #[serde(default)]
    pub guidance: String,
    #[serde(default)]
    pub filters: Vec<FilterRule>,
    #[serde(default)]
    pub macro_adjustment: Option<MacroAdjustment>,
}

/// Dietary preference flag and the filters it implies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRule {
    pub id: String,
    pub name: String,
    /// Alternate labels accepted from forms
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterRule>,
}

impl PreferenceRule {
    /// Match by id, display name or alias, ignoring case
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim().to_lowercase();
        self.id.to_lowercase() == key
            || self.name.to_lowercase() == key
            || self.aliases.iter().any(|a| a.to_lowercase() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_matches_alias() {
        let pref = PreferenceRule {
            id: "gluten_free".to_string(),
            name: "Sin gluten".to_string(),
            aliases: vec!["Celiac friendly".to_string()],
            filters: vec![],
        };
        assert!(pref.matches("gluten_free"));
        assert!(pref.matches("sin gluten"));
        assert!(pref.matches(" Celiac Friendly"));
        assert!(!pref.matches("vegan"));
    }

    #[test]
    fn test_condition_defaults() {
        let json = r#"{ "id": "x", "name": "X" }"#;
        let rule: ConditionRule = serde_json::from_str(json).unwrap();
        assert!(rule.filters.is_empty());
        assert!(rule.macro_adjustment.is_none());
        assert!(rule.restrictions.is_empty());
    }
}
