//! Nutrition Plan MCP Tools
//!
//! Calorie estimates, plan generation, interaction lookups and the sample
//! menu review. Inputs are validated here; the estimators trust them.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{ActivityLevel, MacroRatios, MacroTargets, MenuReview, NutritionPlan, PatientProfile};
use crate::nutrition::{basal_metabolic_rate, macro_grams, NutritionPlanner, PlanError};

/// Response for estimate_calories
#[derive(Debug, Serialize)]
pub struct EstimateCaloriesResponse {
    pub daily_calories: u32,
    pub basal_calories: f64,
    pub activity_level: ActivityLevel,
    pub activity_multiplier: f64,
}

/// Response for estimate_macronutrients
#[derive(Debug, Serialize)]
pub struct EstimateMacronutrientsResponse {
    pub daily_calories: u32,
    pub macros: MacroTargets,
    pub ratios: MacroRatios,
    pub ratios_consistent: bool,
}

/// Response for a generated plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub generated: bool,
    pub plan: NutritionPlan,
    pub foods_by_category: BTreeMap<String, Vec<String>>,
    pub unknown_conditions: Vec<String>,
    pub unknown_preferences: Vec<String>,
}

/// Response when no plan is produced
#[derive(Debug, Serialize)]
pub struct PlanDeclinedResponse {
    pub generated: bool,
    pub warning: String,
}

/// Outcome of generate_nutrition_plan
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GeneratePlanOutcome {
    Generated(Box<PlanResponse>),
    Declined(PlanDeclinedResponse),
}

/// Response for lookup_interactions
#[derive(Debug, Serialize)]
pub struct LookupInteractionsResponse {
    pub interactions: BTreeMap<String, BTreeSet<String>>,
    pub unknown_medications: Vec<String>,
    pub general_advice: Vec<String>,
}

/// Outcome of review_sample_menu
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReviewMenuOutcome {
    Reviewed(MenuReview),
    Declined(PlanDeclinedResponse),
}

/// Reject biometrics the formula is not meaningful for
pub fn validate_biometrics(weight_kg: f64, height_cm: f64) -> Result<(), String> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err("weight_kg must be greater than 0".to_string());
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err("height_cm must be greater than 0".to_string());
    }
    Ok(())
}

/// Estimate daily calories for biometrics and an activity label
pub fn estimate_calories(
    planner: &NutritionPlanner,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_level: &str,
) -> Result<EstimateCaloriesResponse, String> {
    validate_biometrics(weight_kg, height_cm)?;
    let level = ActivityLevel::from_str(activity_level);

    Ok(EstimateCaloriesResponse {
        daily_calories: planner
            .estimator()
            .estimate_daily_calories(weight_kg, height_cm, age_years, level),
        basal_calories: basal_metabolic_rate(weight_kg, height_cm, age_years),
        activity_level: level,
        activity_multiplier: level.multiplier(),
    })
}

/// Split a calorie target into macronutrient grams
pub fn estimate_macronutrients(
    planner: &NutritionPlanner,
    daily_calories: u32,
    conditions: &BTreeSet<String>,
) -> EstimateMacronutrientsResponse {
    let ratios = planner.estimator().ratios_for(conditions);
    EstimateMacronutrientsResponse {
        daily_calories,
        macros: macro_grams(daily_calories, &ratios),
        ratios,
        ratios_consistent: ratios.is_consistent(),
    }
}

/// Generate a plan, or decline when there is nothing to compute
pub fn generate_nutrition_plan(
    planner: &NutritionPlanner,
    profile: &PatientProfile,
) -> Result<GeneratePlanOutcome, String> {
    validate_biometrics(profile.weight_kg, profile.height_cm)?;

    let plan = match planner.generate_plan(profile) {
        Ok(plan) => plan,
        Err(e @ PlanError::NoConditionsSelected) => {
            return Ok(GeneratePlanOutcome::Declined(declined(e)));
        }
    };

    let foods_by_category = plan
        .foods_by_category()
        .into_iter()
        .map(|(category, foods)| {
            (
                category.display_name().to_string(),
                foods.iter().map(|f| f.name.clone()).collect(),
            )
        })
        .collect();

    let reference = planner.engine().reference();
    let unknown_conditions = profile
        .conditions
        .iter()
        .filter(|c| reference.condition(c).is_none())
        .cloned()
        .collect();
    let unknown_preferences = profile
        .preferences
        .iter()
        .filter(|p| reference.preference(p).is_none())
        .cloned()
        .collect();

    Ok(GeneratePlanOutcome::Generated(Box::new(PlanResponse {
        generated: true,
        plan,
        foods_by_category,
        unknown_conditions,
        unknown_preferences,
    })))
}

/// Foods to avoid for each selected medication
pub fn lookup_interactions(planner: &NutritionPlanner, medications: &[String]) -> LookupInteractionsResponse {
    let interactions = planner.engine().lookup_interactions(medications);
    let unknown_medications = medications
        .iter()
        .filter(|m| !interactions.contains_key(m.as_str()))
        .cloned()
        .collect();

    LookupInteractionsResponse {
        interactions,
        unknown_medications,
        general_advice: planner.engine().reference().interaction_advice.clone(),
    }
}

/// Generate a plan for the profile and review the example day against it
pub fn review_sample_menu(
    planner: &NutritionPlanner,
    profile: &PatientProfile,
) -> Result<ReviewMenuOutcome, String> {
    validate_biometrics(profile.weight_kg, profile.height_cm)?;

    match planner.generate_plan(profile) {
        Ok(plan) => Ok(ReviewMenuOutcome::Reviewed(planner.review_sample_menu(&plan))),
        Err(e @ PlanError::NoConditionsSelected) => Ok(ReviewMenuOutcome::Declined(declined(e))),
    }
}

fn declined(err: PlanError) -> PlanDeclinedResponse {
    PlanDeclinedResponse {
        generated: false,
        warning: err.to_string(),
    }
}
