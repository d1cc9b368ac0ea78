//! Calorie and macronutrient estimation
//!
//! Mifflin-St Jeor basal estimate (male/default offset, no sex parameter)
//! scaled by an activity multiplier, and a condition-adjusted macronutrient
//! split over the resulting daily energy.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::models::{ActivityLevel, ConditionRule, MacroPolicy, MacroRatios, MacroTargets};
use crate::reference::ReferenceData;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Resting energy need in kcal/day
///
/// `10*w + 6.25*h - 5*age + 5`. Inputs are not checked.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + 5.0
}

/// Estimated daily energy need, floored to whole kcal
///
/// Callers validate `weight_kg > 0` and `height_cm > 0`. A negative product
/// saturates to 0.
pub fn estimate_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_level: ActivityLevel,
) -> u32 {
    let basal = basal_metabolic_rate(weight_kg, height_cm, age_years);
    (basal * activity_level.multiplier()).floor() as u32
}

/// Apply the macro adjustments of the selected conditions
///
/// Adjustments run in rule-table order, so a later row overwrites the ratios
/// an earlier row set. Selection order does not matter.
pub fn adjusted_ratios(
    policy: &MacroPolicy,
    rules: &[ConditionRule],
    conditions: &BTreeSet<String>,
) -> MacroRatios {
    let adjusted = rules
        .iter()
        .filter(|rule| conditions.contains(&rule.id))
        .filter_map(|rule| rule.macro_adjustment.as_ref().map(|adj| (rule, adj)))
        .fold(policy.base, |ratios, (rule, adj)| {
            tracing::debug!("Applying macro adjustment for {}", rule.id);
            ratios.apply(adj)
        });

    if adjusted.is_consistent() {
        return adjusted;
    }

    if policy.renormalize {
        tracing::warn!(
            "Macro ratios sum to {:.2}, renormalizing",
            adjusted.total()
        );
        adjusted.normalized()
    } else {
        tracing::warn!(
            "Macro ratios sum to {:.2}, computing grams without renormalization",
            adjusted.total()
        );
        adjusted
    }
}

/// Whole grams per macronutrient for a calorie target
pub fn macro_grams(daily_calories: u32, ratios: &MacroRatios) -> MacroTargets {
    let kcal = f64::from(daily_calories);
    MacroTargets {
        protein_g: (kcal * ratios.protein / KCAL_PER_G_PROTEIN).floor() as u32,
        carbs_g: (kcal * ratios.carbs / KCAL_PER_G_CARBS).floor() as u32,
        fat_g: (kcal * ratios.fat / KCAL_PER_G_FAT).floor() as u32,
    }
}

/// Calorie estimator bound to a set of reference tables
#[derive(Debug, Clone)]
pub struct CalorieEstimator {
    reference: Arc<ReferenceData>,
}

impl CalorieEstimator {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn estimate_daily_calories(
        &self,
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        activity_level: ActivityLevel,
    ) -> u32 {
        estimate_daily_calories(weight_kg, height_cm, age_years, activity_level)
    }

    /// Ratios for a condition set under the reference macro policy
    pub fn ratios_for(&self, conditions: &BTreeSet<String>) -> MacroRatios {
        adjusted_ratios(
            &self.reference.macro_policy,
            &self.reference.conditions,
            conditions,
        )
    }

    pub fn estimate_macronutrients(
        &self,
        daily_calories: u32,
        conditions: &BTreeSet<String>,
    ) -> MacroTargets {
        macro_grams(daily_calories, &self.ratios_for(conditions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> CalorieEstimator {
        CalorieEstimator::new(Arc::new(ReferenceData::embedded().unwrap()))
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_patient_sedentary() {
        // 700 + 1062.5 - 150 + 5 = 1617.5; x1.2 = 1941
        assert!((basal_metabolic_rate(70.0, 170.0, 30) - 1617.5).abs() < 1e-9);
        let level = ActivityLevel::from_str("Sedentario");
        assert_eq!(estimate_daily_calories(70.0, 170.0, 30, level), 1941);
    }

    #[test]
    fn test_activity_levels() {
        assert_eq!(estimate_daily_calories(70.0, 170.0, 30, ActivityLevel::Light), 2224);
        assert_eq!(estimate_daily_calories(70.0, 170.0, 30, ActivityLevel::Moderate), 2507);
        assert_eq!(estimate_daily_calories(70.0, 170.0, 30, ActivityLevel::Active), 2790);
        assert_eq!(estimate_daily_calories(70.0, 170.0, 30, ActivityLevel::VeryActive), 3073);
    }

    #[test]
    fn test_unknown_activity_uses_sedentary() {
        let unknown = ActivityLevel::from_str("couch");
        assert_eq!(
            estimate_daily_calories(70.0, 170.0, 30, unknown),
            estimate_daily_calories(70.0, 170.0, 30, ActivityLevel::Sedentary)
        );
    }

    #[test]
    fn test_monotonic_in_weight_height_and_age() {
        for level in ActivityLevel::ALL {
            for age in [0u32, 18, 45, 90] {
                let mut prev = 0;
                for weight in (30..=200).step_by(10) {
                    let kcal = estimate_daily_calories(weight as f64, 170.0, age, level);
                    assert!(kcal >= prev);
                    prev = kcal;
                }

                let mut prev = 0;
                for height in (100..=220).step_by(5) {
                    let kcal = estimate_daily_calories(70.0, height as f64, age, level);
                    assert!(kcal >= prev);
                    prev = kcal;
                }
            }

            let mut prev = u32::MAX;
            for age in 0..=120 {
                let kcal = estimate_daily_calories(70.0, 170.0, age, level);
                assert!(kcal <= prev);
                prev = kcal;
            }
        }
    }

    #[test]
    fn test_macros_base_split() {
        let m = estimator().estimate_macronutrients(2000, &set(&[]));
        assert_eq!(m, MacroTargets { protein_g: 100, carbs_g: 250, fat_g: 66 });
    }

    #[test]
    fn test_macros_diabetes() {
        let m = estimator().estimate_macronutrients(2000, &set(&["diabetes"]));
        assert_eq!(m, MacroTargets { protein_g: 125, carbs_g: 200, fat_g: 77 });
    }

    #[test]
    fn test_macros_kidney_disease_keeps_base_fat() {
        let m = estimator().estimate_macronutrients(2000, &set(&["chronic_kidney_disease"]));
        assert_eq!(m, MacroTargets { protein_g: 75, carbs_g: 300, fat_g: 66 });
    }

    #[test]
    fn test_macros_diabetes_and_kidney_last_wins_without_renormalizing() {
        let est = estimator();
        let ratios = est.ratios_for(&set(&["chronic_kidney_disease", "diabetes"]));
        assert!((ratios.protein - 0.15).abs() < 1e-9);
        assert!((ratios.carbs - 0.60).abs() < 1e-9);
        assert!((ratios.fat - 0.35).abs() < 1e-9);
        assert!((ratios.total() - 1.10).abs() < 1e-9);

        let m = est.estimate_macronutrients(2000, &set(&["diabetes", "chronic_kidney_disease"]));
        assert_eq!(m, MacroTargets { protein_g: 75, carbs_g: 300, fat_g: 77 });
    }

    #[test]
    fn test_renormalize_policy() {
        let mut data = ReferenceData::embedded().unwrap();
        data.macro_policy.renormalize = true;
        let est = CalorieEstimator::new(Arc::new(data));

        let ratios = est.ratios_for(&set(&["diabetes", "chronic_kidney_disease"]));
        assert!(ratios.is_consistent());

        // Consistent ratios pass through untouched
        let m = est.estimate_macronutrients(2000, &set(&["diabetes"]));
        assert_eq!(m, MacroTargets { protein_g: 125, carbs_g: 200, fat_g: 77 });
    }

    #[test]
    fn test_unknown_condition_has_no_macro_effect() {
        let m = estimator().estimate_macronutrients(2000, &set(&["gout"]));
        assert_eq!(m, MacroTargets { protein_g: 100, carbs_g: 250, fat_g: 66 });
    }

    #[test]
    fn test_zero_calories() {
        let m = estimator().estimate_macronutrients(0, &set(&["diabetes"]));
        assert_eq!(m, MacroTargets { protein_g: 0, carbs_g: 0, fat_g: 0 });
    }
}
