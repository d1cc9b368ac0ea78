//! TDA MCP Server Implementation
//!
//! Implements the MCP server with all TDA tools.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{ActivityLevel, PatientProfile};
use crate::nutrition::NutritionPlanner;
use crate::reference::ReferenceData;
use crate::tools::catalog;
use crate::tools::plans;
use crate::tools::status::StatusTracker;

/// TDA MCP Service
#[derive(Clone)]
pub struct TdaService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    reference: Arc<ReferenceData>,
    planner: NutritionPlanner,
    tool_router: ToolRouter<TdaService>,
}

impl TdaService {
    pub fn new(reference_path: Option<PathBuf>, reference: Arc<ReferenceData>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(reference_path))),
            planner: NutritionPlanner::new(reference.clone()),
            reference,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PatientParams {
    pub name: Option<String>,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub age_years: u32,
    /// sedentary, light, moderate, active, very_active (or the Spanish form labels)
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    /// Condition ids from list_conditions
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Medication ids from list_medications
    #[serde(default)]
    pub medications: Vec<String>,
    /// Preference ids or labels from list_preferences
    #[serde(default)]
    pub preferences: Vec<String>,
    pub allergies: Option<String>,
}

fn default_activity_level() -> String { "sedentary".to_string() }

impl From<PatientParams> for PatientProfile {
    fn from(p: PatientParams) -> Self {
        let mut profile = PatientProfile::new(
            p.weight_kg,
            p.height_cm,
            p.age_years,
            ActivityLevel::from_str(&p.activity_level),
        )
        .with_conditions(p.conditions)
        .with_medications(p.medications)
        .with_preferences(p.preferences);
        profile.name = p.name.filter(|n| !n.trim().is_empty());
        profile.allergies = p.allergies.filter(|a| !a.trim().is_empty());
        profile
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCaloriesParams {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateMacronutrientsParams {
    pub daily_calories: u32,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupInteractionsParams {
    pub medications: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// fruit, vegetable, cereal, animal_protein, plant_protein, dairy, fat, other
    pub category: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TdaService {
    // --- Status ---

    #[tool(description = "Get the current status of the TDA service including build info, reference data version and process information")]
    async fn tda_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.reference);
        to_json(&status)
    }

    #[tool(description = "Get step-by-step instructions for building a therapeutic diet plan. Call this before the first plan of a session.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    // --- Reference Catalog ---

    #[tool(description = "List the health conditions the assistant recognizes, with their restrictions, guidance and catalog filters")]
    fn list_conditions(&self) -> Result<CallToolResult, McpError> {
        to_json(&catalog::list_conditions(&self.reference))
    }

    #[tool(description = "List the dietary preferences the assistant recognizes and the filters they apply")]
    fn list_preferences(&self) -> Result<CallToolResult, McpError> {
        to_json(&catalog::list_preferences(&self.reference))
    }

    #[tool(description = "List medications with known food interactions and the foods to avoid for each")]
    fn list_medications(&self) -> Result<CallToolResult, McpError> {
        to_json(&catalog::list_medications(&self.reference))
    }

    #[tool(description = "List the food catalog with per-unit nutrition, optionally filtered by category")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::list_foods(&self.reference, p.category.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Estimates ---

    #[tool(description = "Estimate daily calories (Mifflin-St Jeor x activity multiplier). Unknown activity levels use sedentary.")]
    fn estimate_calories(&self, Parameters(p): Parameters<EstimateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = plans::estimate_calories(&self.planner, p.weight_kg, p.height_cm, p.age_years, &p.activity_level)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Split a daily calorie target into protein, carbohydrate and fat grams adjusted for the selected conditions")]
    fn estimate_macronutrients(&self, Parameters(p): Parameters<EstimateMacronutrientsParams>) -> Result<CallToolResult, McpError> {
        let conditions: BTreeSet<String> = p.conditions.into_iter().collect();
        to_json(&plans::estimate_macronutrients(&self.planner, p.daily_calories, &conditions))
    }

    // --- Plans ---

    #[tool(description = "Generate a nutrition plan: calorie target, macronutrients, recommended foods, restrictions, guidance and medication interaction warnings. Requires at least one known condition id.")]
    fn generate_nutrition_plan(&self, Parameters(p): Parameters<PatientParams>) -> Result<CallToolResult, McpError> {
        let profile = PatientProfile::from(p);
        let result = plans::generate_nutrition_plan(&self.planner, &profile)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Look up foods and substances to avoid for the given medications, plus general interaction advice. Medications without known interactions are listed as unknown.")]
    fn lookup_interactions(&self, Parameters(p): Parameters<LookupInteractionsParams>) -> Result<CallToolResult, McpError> {
        to_json(&plans::lookup_interactions(&self.planner, &p.medications))
    }

    #[tool(description = "Generate a plan for the patient and check the example day menu against it, marking each dish as recommended or not")]
    fn review_sample_menu(&self, Parameters(p): Parameters<PatientParams>) -> Result<CallToolResult, McpError> {
        let profile = PatientProfile::from(p);
        let result = plans::review_sample_menu(&self.planner, &profile)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for TdaService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tda".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Therapeutic Diet Assistant".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Therapeutic Diet Assistant (TDA) - condition-aware nutrition plans. \
                 IMPORTANT: Call plan_instructions before the first plan. \
                 Reference: list_conditions, list_preferences, list_medications, list_foods. \
                 Estimates: estimate_calories, estimate_macronutrients. \
                 Plans: generate_nutrition_plan (requires at least one condition), review_sample_menu. \
                 Interactions: lookup_interactions. \
                 Nothing is stored; every call recomputes from its input. Not a substitute for medical advice."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(conditions: &[&str]) -> PatientParams {
        PatientParams {
            name: Some("  ".to_string()),
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            activity_level: "Muy activo".to_string(),
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            medications: vec!["warfarina".to_string()],
            preferences: vec![],
            allergies: None,
        }
    }

    #[test]
    fn test_params_into_profile() {
        let profile = PatientProfile::from(params(&["diabetes", "diabetes"]));
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.conditions.len(), 1);
        assert!(profile.name.is_none());
    }

    #[test]
    fn test_params_default_activity() {
        let json = r#"{ "name": null, "weight_kg": 70, "height_cm": 170, "age_years": 30, "allergies": null }"#;
        let p: PatientParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.activity_level, "sedentary");
        assert!(p.conditions.is_empty());
    }
}
