//! Data models
//!
//! Value types for patient input, reference tables and derived plans.

mod activity;
mod condition;
mod filter;
mod food_item;
mod macros;
mod menu;
mod nutrition;
mod patient;
mod plan;

pub use activity::ActivityLevel;
pub use condition::{ConditionRule, PreferenceRule};
pub use filter::{Comparison, FilterRule};
pub use food_item::{FoodCategory, FoodFlag, FoodItem};
pub use macros::{MacroAdjustment, MacroPolicy, MacroRatios, MacroTargets};
pub use menu::{DishReview, MealReview, MealType, MenuReview, SampleMeal};
pub use nutrition::{Nutrient, Nutrition};
pub use patient::PatientProfile;
pub use plan::{ConditionGuidance, InteractionWarning, NutritionPlan};
