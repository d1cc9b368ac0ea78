//! Food Item model
//!
//! A catalog row: name, category and per-unit nutrition.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Catalog category of a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    Cereal,
    AnimalProtein,
    PlantProtein,
    Dairy,
    Fat,
    Other,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Cereal => "cereal",
            FoodCategory::AnimalProtein => "animal_protein",
            FoodCategory::PlantProtein => "plant_protein",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fat => "fat",
            FoodCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fruit" | "fruta" => Some(FoodCategory::Fruit),
            "vegetable" | "verdura" => Some(FoodCategory::Vegetable),
            "cereal" => Some(FoodCategory::Cereal),
            "animal_protein" | "proteina_animal" => Some(FoodCategory::AnimalProtein),
            "plant_protein" | "proteina_vegetal" => Some(FoodCategory::PlantProtein),
            "dairy" | "lacteo" => Some(FoodCategory::Dairy),
            "fat" | "grasa" => Some(FoodCategory::Fat),
            "other" => Some(FoodCategory::Other),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "Frutas",
            FoodCategory::Vegetable => "Verduras",
            FoodCategory::Cereal => "Cereales",
            FoodCategory::AnimalProtein => "Proteína animal",
            FoodCategory::PlantProtein => "Proteína vegetal",
            FoodCategory::Dairy => "Lácteos",
            FoodCategory::Fat => "Grasas",
            FoodCategory::Other => "Otros",
        }
    }
}

/// Boolean food attributes a filter can exclude on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodFlag {
    Gluten,
}

/// A food catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: FoodCategory,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub gluten: bool,
}

impl FoodItem {
    pub fn has_flag(&self, flag: FoodFlag) -> bool {
        match flag {
            FoodFlag::Gluten => self.gluten,
        }
    }

    /// Case-insensitive name comparison
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.trim().to_lowercase() == other.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> FoodItem {
        FoodItem {
            name: "Pan integral".to_string(),
            category: FoodCategory::Cereal,
            nutrition: Nutrition::zero(),
            gluten: true,
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(FoodCategory::from_str("animal_protein"), Some(FoodCategory::AnimalProtein));
        assert_eq!(FoodCategory::from_str("Fruta"), Some(FoodCategory::Fruit));
        assert_eq!(FoodCategory::from_str("proteina"), None);
    }

    #[test]
    fn test_has_flag() {
        assert!(bread().has_flag(FoodFlag::Gluten));
    }

    #[test]
    fn test_name_matches_ignores_case() {
        assert!(bread().name_matches("pan INTEGRAL "));
        assert!(!bread().name_matches("pan"));
    }

    #[test]
    fn test_deserialize_defaults_gluten() {
        let json = r#"{
            "name": "Manzana",
            "category": "fruit",
            "nutrition": { "calories": 52, "protein": 0.3, "carbs": 14, "fat": 0.2 }
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert!(!item.gluten);
        assert_eq!(item.nutrition.sodium, 0.0);
    }
}
