//! Macronutrient ratio and target types

use serde::{Deserialize, Serialize};

/// Fractions of daily energy assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatios {
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Whether the ratios add up to one (within rounding)
    pub fn is_consistent(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9
    }

    /// Rescale so the ratios sum to one. A zero total is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return *self;
        }
        Self {
            protein: self.protein / total,
            carbs: self.carbs / total,
            fat: self.fat / total,
        }
    }

    /// Overwrite the ratios the adjustment names
    pub fn apply(&self, adjustment: &MacroAdjustment) -> Self {
        Self {
            protein: adjustment.protein.unwrap_or(self.protein),
            carbs: adjustment.carbs.unwrap_or(self.carbs),
            fat: adjustment.fat.unwrap_or(self.fat),
        }
    }
}

impl Default for MacroRatios {
    fn default() -> Self {
        Self {
            protein: 0.20,
            carbs: 0.50,
            fat: 0.30,
        }
    }
}

/// Partial override of [`MacroRatios`] declared by a condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroAdjustment {
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

impl MacroAdjustment {
    pub fn values(&self) -> impl Iterator<Item = f64> {
        [self.protein, self.carbs, self.fat].into_iter().flatten()
    }
}

/// How ratios are derived before grams are computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPolicy {
    #[serde(default)]
    pub base: MacroRatios,
    /// Rescale the adjusted ratios to sum to one
    #[serde(default)]
    pub renormalize: bool,
}

impl Default for MacroPolicy {
    fn default() -> Self {
        Self {
            base: MacroRatios::default(),
            renormalize: false,
        }
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_consistent() {
        assert!(MacroRatios::default().is_consistent());
    }

    #[test]
    fn test_apply_partial_keeps_unset() {
        let diabetic = MacroRatios::default().apply(&MacroAdjustment {
            protein: Some(0.25),
            carbs: Some(0.40),
            fat: Some(0.35),
        });
        let renal = diabetic.apply(&MacroAdjustment {
            protein: Some(0.15),
            carbs: Some(0.60),
            fat: None,
        });
        assert_eq!(renal.fat, 0.35);
        assert!((renal.total() - 1.10).abs() < 1e-9);
        assert!(!renal.is_consistent());
    }

    #[test]
    fn test_normalized() {
        let r = MacroRatios { protein: 0.15, carbs: 0.60, fat: 0.35 }.normalized();
        assert!(r.is_consistent());
        assert!((r.carbs - 0.60 / 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_zero_total() {
        let zero = MacroRatios { protein: 0.0, carbs: 0.0, fat: 0.0 };
        assert_eq!(zero.normalized(), zero);
    }
}
