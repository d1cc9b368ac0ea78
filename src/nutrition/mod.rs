//! Nutrition calculation module
//!
//! Calorie estimation, catalog filtering and plan generation.

pub mod calories;
pub mod planner;
pub mod rules;

pub use calories::{
    adjusted_ratios, basal_metabolic_rate, estimate_daily_calories, macro_grams, CalorieEstimator,
};
pub use planner::{NutritionPlanner, PlanError};
pub use rules::{filter_catalog, AppliedFilter, DietaryRuleEngine, FilterOutcome};
