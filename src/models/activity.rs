//! Activity level model
//!
//! Reported physical activity and its energy multiplier.

use serde::{Deserialize, Serialize};

/// Reported physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse an id or a form label. Unknown values are sedentary.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "sedentario" => ActivityLevel::Sedentary,
            "light" | "ligero" => ActivityLevel::Light,
            "moderate" | "moderado" => ActivityLevel::Moderate,
            "active" | "activo" => ActivityLevel::Active,
            "very_active" | "very active" | "muy activo" | "muy_activo" => ActivityLevel::VeryActive,
            other => {
                tracing::debug!("Unknown activity level '{}', using sedentary", other);
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentario",
            ActivityLevel::Light => "Ligero",
            ActivityLevel::Moderate => "Moderado",
            ActivityLevel::Active => "Activo",
            ActivityLevel::VeryActive => "Muy activo",
        }
    }

    /// Factor applied to the basal estimate
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ids_and_labels() {
        assert_eq!(ActivityLevel::from_str("sedentary"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str("Sedentario"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str("Ligero"), ActivityLevel::Light);
        assert_eq!(ActivityLevel::from_str("moderate"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_str("Activo"), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_str("Muy activo"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_str("very_active"), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::from_str("marathoner"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str(""), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str("marathoner").multiplier(), 1.2);
    }

    #[test]
    fn test_round_trip_ids() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_str(level.as_str()), level);
            assert_eq!(ActivityLevel::from_str(level.display_name()), level);
        }
    }

    #[test]
    fn test_multipliers_increase_with_activity() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
    }
}
