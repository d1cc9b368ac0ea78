//! Nutrition plan generation
//!
//! Runs the calorie estimator and the rule engine for one patient profile and
//! packages the result as a [`NutritionPlan`].

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use super::calories::{macro_grams, CalorieEstimator};
use super::rules::DietaryRuleEngine;
use crate::models::{
    ConditionGuidance, DishReview, MealReview, MenuReview, Nutrition, NutritionPlan, PatientProfile,
};
use crate::reference::ReferenceData;

/// Reasons a plan is not produced
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("No known health condition selected; select at least one condition from list_conditions to generate a plan")]
    NoConditionsSelected,
}

/// Both estimators over one set of reference tables
#[derive(Debug, Clone)]
pub struct NutritionPlanner {
    estimator: CalorieEstimator,
    engine: DietaryRuleEngine,
}

impl NutritionPlanner {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            estimator: CalorieEstimator::new(reference.clone()),
            engine: DietaryRuleEngine::new(reference),
        }
    }

    pub fn estimator(&self) -> &CalorieEstimator {
        &self.estimator
    }

    pub fn engine(&self) -> &DietaryRuleEngine {
        &self.engine
    }

    /// Build a fresh plan for `profile`
    pub fn generate_plan(&self, profile: &PatientProfile) -> Result<NutritionPlan, PlanError> {
        let reference = self.engine.reference();
        if !profile
            .conditions
            .iter()
            .any(|id| reference.condition(id).is_some())
        {
            if !profile.conditions.is_empty() {
                tracing::warn!(
                    "None of the selected conditions are known: {:?}",
                    profile.conditions
                );
            }
            return Err(PlanError::NoConditionsSelected);
        }

        let daily_calories = self.estimator.estimate_daily_calories(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.activity_level,
        );
        let ratios = self.estimator.ratios_for(&profile.conditions);
        let macros = macro_grams(daily_calories, &ratios);

        let outcome = self
            .engine
            .filter_foods(&profile.conditions, &profile.preferences);
        let interaction_warnings = self
            .engine
            .interaction_warnings(&outcome.foods, &profile.medications);

        let guidance = reference
            .conditions
            .iter()
            .filter(|c| profile.conditions.contains(&c.id))
            .map(|c| ConditionGuidance {
                condition: c.id.clone(),
                name: c.name.clone(),
                guidance: c.guidance.clone(),
            })
            .collect();

        tracing::info!(
            "Generated plan: {} kcal, {} foods, {} restrictions, {} interaction warnings",
            daily_calories,
            outcome.foods.len(),
            outcome.restrictions.len(),
            interaction_warnings.len()
        );

        Ok(NutritionPlan {
            patient_name: profile.name.clone(),
            allergies: profile.allergies.clone(),
            daily_calories,
            macros,
            ratios,
            recommended_foods: outcome.foods,
            restrictions: outcome.restrictions,
            monitored_nutrients: outcome.monitored_nutrients,
            guidance,
            interaction_warnings,
            generated_at: Utc::now(),
        })
    }

    /// Check the reference example day against a plan
    pub fn review_sample_menu(&self, plan: &NutritionPlan) -> MenuReview {
        let reference = self.engine.reference();
        let mut recommended_count = 0;
        let mut dish_count = 0;

        let meals = reference
            .sample_menu
            .iter()
            .map(|meal| {
                let dishes: Vec<DishReview> = meal
                    .dishes
                    .iter()
                    .map(|dish| DishReview {
                        dish: dish.clone(),
                        recommended: plan.recommends(dish),
                        in_catalog: reference.food(dish).is_some(),
                    })
                    .collect();

                let recommended_nutrition: Nutrition = plan
                    .recommended_foods
                    .iter()
                    .filter(|food| meal.dishes.iter().any(|d| food.name_matches(d)))
                    .map(|food| food.nutrition.clone())
                    .sum();

                dish_count += dishes.len();
                recommended_count += dishes.iter().filter(|d| d.recommended).count();

                MealReview {
                    meal: meal.meal,
                    meal_display: meal.meal.display_name(),
                    dishes,
                    recommended_nutrition,
                }
            })
            .collect();

        MenuReview {
            meals,
            recommended_count,
            dish_count,
        }
    }
}
