//! Catalog filter rules
//!
//! One row of the per-condition / per-preference filter table. Every rule is
//! an independent keep-predicate over a single [`FoodItem`].

use serde::{Deserialize, Serialize};

use super::{FoodCategory, FoodFlag, FoodItem, Nutrient};

/// Comparison applied between a nutrient value and a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// value <= limit
    AtMost,
    /// value >= limit
    AtLeast,
    /// value < limit
    Below,
    /// value > limit
    Above,
}

impl Comparison {
    pub fn holds(&self, value: f64, limit: f64) -> bool {
        match self {
            Comparison::AtMost => value <= limit,
            Comparison::AtLeast => value >= limit,
            Comparison::Below => value < limit,
            Comparison::Above => value > limit,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::AtMost => "<=",
            Comparison::AtLeast => ">=",
            Comparison::Below => "<",
            Comparison::Above => ">",
        }
    }
}

/// A keep-predicate over catalog items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterRule {
    /// Keep items whose nutrient satisfies `op limit`
    Threshold {
        nutrient: Nutrient,
        op: Comparison,
        limit: f64,
    },
    /// Drop items carrying the flag
    ExcludeFlag { flag: FoodFlag },
    /// Drop items of the category
    ExcludeCategory { category: FoodCategory },
}

impl FilterRule {
    /// Whether the item survives this rule
    pub fn keeps(&self, item: &FoodItem) -> bool {
        match self {
            FilterRule::Threshold { nutrient, op, limit } => {
                op.holds(item.nutrition.get(*nutrient), *limit)
            }
            FilterRule::ExcludeFlag { flag } => !item.has_flag(*flag),
            FilterRule::ExcludeCategory { category } => item.category != *category,
        }
    }

    /// Short human-readable form, used in logs and tool output
    pub fn describe(&self) -> String {
        match self {
            FilterRule::Threshold { nutrient, op, limit } => format!(
                "{} {} {} {}",
                nutrient.as_str(),
                op.symbol(),
                limit,
                nutrient.unit()
            ),
            FilterRule::ExcludeFlag { flag } => match flag {
                FoodFlag::Gluten => "no gluten".to_string(),
            },
            FilterRule::ExcludeCategory { category } => format!("no {}", category.as_str()),
        }
    }
}
