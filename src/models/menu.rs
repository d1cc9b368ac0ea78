//! Sample menu model
//!
//! The reference example day and its review against a plan.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Desayuno",
            MealType::Lunch => "Almuerzo",
            MealType::Dinner => "Cena",
            MealType::Snack => "Meriendas",
        }
    }
}

/// One meal of the reference example day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMeal {
    pub meal: MealType,
    pub dishes: Vec<String>,
}

/// Dish verdict against a plan
#[derive(Debug, Clone, Serialize)]
pub struct DishReview {
    pub dish: String,
    pub recommended: bool,
    /// Whether the dish exists in the food catalog at all
    pub in_catalog: bool,
}

/// Review of one meal
#[derive(Debug, Clone, Serialize)]
pub struct MealReview {
    pub meal: MealType,
    pub meal_display: &'static str,
    pub dishes: Vec<DishReview>,
    /// Per-unit totals over the recommended catalog dishes
    pub recommended_nutrition: Nutrition,
}

/// Review of the whole example day
#[derive(Debug, Clone, Serialize)]
pub struct MenuReview {
    pub meals: Vec<MealReview>,
    pub recommended_count: usize,
    pub dish_count: usize,
}
