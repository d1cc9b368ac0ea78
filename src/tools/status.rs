//! TDA Status Tool
//!
//! Provides runtime status information about the TDA service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::reference::ReferenceData;

/// Plan generation instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# TDA Nutrition Plan Instructions

This guide explains how to build a therapeutic diet plan with the Therapeutic
Diet Assistant (TDA) tools.

## Workflow

1. Call `list_conditions`, `list_preferences` and `list_medications` to see the
   ids the assistant recognizes.
2. Collect the patient's weight (kg), height (cm), age (years) and activity
   level: `sedentary`, `light`, `moderate`, `active`, `very_active` (the form
   labels `Sedentario`, `Ligero`, `Moderado`, `Activo`, `Muy activo` work too).
   Unknown activity labels are treated as sedentary.
3. Call `generate_nutrition_plan` with at least one known condition id.
   - With no known condition the tool answers `generated: false` and a warning.
     Ask the patient for a diagnosis instead of retrying.
4. Show `foods_by_category`, `restrictions` and `guidance`.
5. Always show `interaction_warnings`: recommended foods that a selected
   medication says to avoid.
6. Optionally call `review_sample_menu` with the same patient data.

## Condition ids

| id | filter |
|----|--------|
| diabetes | sugar <= 5 g |
| hypertension | sodium <= 100 mg |
| cardiac_disease | sodium <= 100 mg |
| chronic_kidney_disease | potassium <= 200 mg |
| celiac_disease | no gluten |

Use `list_conditions` for the live table; the reference data may differ.

## Macronutrients

The base split is 20% protein, 50% carbohydrate, 30% fat. Diabetes and
chronic kidney disease adjust it. When both are selected the ratios sum to
110% (`ratios_consistent: false` in `estimate_macronutrients`). Mention this to
the clinician rather than correcting the numbers yourself.

## Important

- This is not medical decision support. Always recommend the patient confirm
  the plan with their physician or dietitian.
- Nothing is saved. Every call recomputes the plan from the input.
"#;

/// Runtime status of the TDA service
#[derive(Debug, Clone, Serialize)]
pub struct TdaStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub embedded_reference_version: &'static str,

    /// Reference data information
    pub reference_source: String,
    pub reference_version: String,
    pub condition_count: usize,
    pub preference_count: usize,
    pub food_count: usize,
    pub medication_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    reference_path: Option<PathBuf>,
}

impl StatusTracker {
    pub fn new(reference_path: Option<PathBuf>) -> Self {
        Self {
            start_time: Instant::now(),
            reference_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, reference: &ReferenceData) -> TdaStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TdaStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            embedded_reference_version: build_info.embedded_reference_version,
            reference_source: self
                .reference_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string()),
            reference_version: reference.version.clone(),
            condition_count: reference.conditions.len(),
            preference_count: reference.preferences.len(),
            food_count: reference.foods.len(),
            medication_count: reference.interactions.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
