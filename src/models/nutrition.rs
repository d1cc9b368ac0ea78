//! Shared nutrition data structure
//!
//! Per-reference-unit quantities used by the food catalog, the filter table
//! and the sample menu totals.

use serde::{Deserialize, Serialize};

/// Nutritional information for one reference unit of a food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,    // grams
    pub carbs: f64,      // grams
    pub fat: f64,        // grams
    #[serde(default)]
    pub fiber: f64,      // grams
    #[serde(default)]
    pub sugar: f64,      // grams
    #[serde(default)]
    pub sodium: f64,     // milligrams
    #[serde(default)]
    pub potassium: f64,  // milligrams
    #[serde(default)]
    pub phosphorus: f64, // milligrams
}

/// A single nutrient column of [`Nutrition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    Sodium,
    Potassium,
    Phosphorus,
}

impl Nutrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::Sodium => "sodium",
            Nutrient::Potassium => "potassium",
            Nutrient::Phosphorus => "phosphorus",
        }
    }

    /// Unit the catalog stores this nutrient in
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Protein | Nutrient::Carbs | Nutrient::Fat | Nutrient::Fiber | Nutrient::Sugar => "g",
            Nutrient::Sodium | Nutrient::Potassium | Nutrient::Phosphorus => "mg",
        }
    }
}

impl Nutrition {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Read one nutrient column
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::Potassium => self.potassium,
            Nutrient::Phosphorus => self.phosphorus,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
            potassium: self.potassium + other.potassium,
            phosphorus: self.phosphorus + other.phosphorus,
        }
    }

    /// All columns as (nutrient, value) pairs
    pub fn columns(&self) -> [(Nutrient, f64); 9] {
        [
            (Nutrient::Calories, self.calories),
            (Nutrient::Protein, self.protein),
            (Nutrient::Carbs, self.carbs),
            (Nutrient::Fat, self.fat),
            (Nutrient::Fiber, self.fiber),
            (Nutrient::Sugar, self.sugar),
            (Nutrient::Sodium, self.sodium),
            (Nutrient::Potassium, self.potassium),
            (Nutrient::Phosphorus, self.phosphorus),
        ]
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Nutrition {
        Nutrition {
            calories: 52.0,
            protein: 0.3,
            carbs: 14.0,
            fat: 0.2,
            fiber: 2.4,
            sugar: 10.0,
            sodium: 1.0,
            potassium: 107.0,
            phosphorus: 11.0,
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let n = apple();
        for (nutrient, value) in n.columns() {
            assert_eq!(n.get(nutrient), value);
        }
        assert_eq!(n.get(Nutrient::Potassium), 107.0);
    }

    #[test]
    fn test_sum() {
        let total: Nutrition = vec![apple(), apple()].into_iter().sum();
        assert!((total.calories - 104.0).abs() < 1e-9);
        assert!((total.sugar - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }

    #[test]
    fn test_nutrient_serde_names() {
        let json = serde_json::to_string(&Nutrient::Potassium).unwrap();
        assert_eq!(json, "\"potassium\"");
        assert_eq!(Nutrient::Sodium.unit(), "mg");
        assert_eq!(Nutrient::Sugar.unit(), "g");
    }
}
