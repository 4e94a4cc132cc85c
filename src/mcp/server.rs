//! BestiNut MCP Server Implementation
//!
//! Implements the MCP server with all BestiNut tools.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::StdRng;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::assistant::{ChatSession, VoiceSession};
use crate::db::Database;
use crate::models::{MacroTargets, ProfileForm};
use crate::recognition::{ImagePayload, MockFoodClassifier};
use crate::tools::charts::{self, ChartResponse, WeightPoint};
use crate::tools::status::StatusTracker;
use crate::tools::{chat, food_scan, plans, preferences};

/// BestiNut MCP Service
#[derive(Clone)]
pub struct BestinutService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    tool_router: ToolRouter<BestinutService>,
    /// Conversation with the assistant widget
    chat: Arc<Mutex<ChatSession>>,
    /// Voice command button
    voice: Arc<Mutex<VoiceSession>>,
    classifier: Arc<std::sync::Mutex<MockFoodClassifier<StdRng>>>,
}

impl BestinutService {
    pub fn new(database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database.path().to_path_buf()))),
            database,
            tool_router: Self::tool_router(),
            chat: Arc::new(Mutex::new(ChatSession::new())),
            voice: Arc::new(Mutex::new(VoiceSession::new())),
            classifier: Arc::new(std::sync::Mutex::new(MockFoodClassifier::from_entropy())),
        }
    }
}

// ============================================================================
// Diet Plan Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateDietPlanParams {
    /// Name shown on the plan
    pub name: Option<String>,
    /// Age in years (number or numeric text)
    pub age: Option<serde_json::Value>,
    /// "male" or "female"
    pub sex: Option<String>,
    /// Body weight in kilograms (number or numeric text)
    pub weight_kg: Option<serde_json::Value>,
    /// Height in centimetres (number or numeric text)
    pub height_cm: Option<serde_json::Value>,
    /// sedentary, light, moderate, active, very-active
    pub activity_level: Option<String>,
    /// weight-loss, weight-gain, maintain, muscle-gain, healthy-lifestyle
    pub goal: Option<String>,
    pub allergies: Option<String>,
    pub preferences: Option<String>,
}

/// Raw form text for a numeric field; the profile validator judges it
fn form_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl From<EstimateDietPlanParams> for ProfileForm {
    fn from(p: EstimateDietPlanParams) -> Self {
        ProfileForm {
            name: p.name,
            age: form_text(p.age),
            sex: p.sex,
            weight_kg: form_text(p.weight_kg),
            height_cm: form_text(p.height_cm),
            activity_level: p.activity_level,
            goal: p.goal,
            allergies: p.allergies,
            preferences: p.preferences,
        }
    }
}

// ============================================================================
// Food Scan Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScanFoodImageParams {
    /// Path to an image file on disk
    pub file_path: Option<String>,
    /// Base64 image data (used when file_path is not given)
    pub image_base64: Option<String>,
    /// MIME type of image_base64, e.g. "image/jpeg"
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScanPayloadResponse {
    analysis: crate::recognition::FoodAnalysis,
    message: String,
}

// ============================================================================
// Assistant Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AskAssistantParams {
    /// Question for the nutrition assistant
    pub message: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RouteVoiceCommandParams {
    /// Recognised speech or typed command, e.g. "buka analisis"
    pub transcript: String,
}

// ============================================================================
// Chart Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeightPointParam {
    /// Axis label, e.g. "Jan"
    pub label: String,
    pub weight_kg: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderWeightChartParams {
    /// Weight history; sample data is used when omitted
    pub points: Option<Vec<WeightPointParam>>,
    /// Also write the PNG to this path
    pub output_path: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderMacroChartParams {
    /// Daily calories; derived from the grams when omitted
    pub calories: Option<i64>,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
    /// Also write the PNG to this path
    pub output_path: Option<String>,
}

// ============================================================================
// Preference Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetThemeParams {
    /// Theme name, e.g. "light" or "dark"
    pub theme: String,
}

impl RenderMacroChartParams {
    fn targets(&self) -> Result<MacroTargets, String> {
        let grams = [
            ("protein_grams", self.protein_grams),
            ("carb_grams", self.carb_grams),
            ("fat_grams", self.fat_grams),
        ];
        if let Some((field, value)) = grams.iter().find(|(_, g)| *g < 0) {
            return Err(format!("{} must not be negative (got {})", field, value));
        }

        let mut targets = MacroTargets {
            calories: 0,
            protein_grams: self.protein_grams,
            carb_grams: self.carb_grams,
            fat_grams: self.fat_grams,
        };
        targets.calories = self.calories.unwrap_or_else(|| targets.energy_from_grams());
        Ok(targets)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
}

fn chart_result(chart: ChartResponse) -> Result<CallToolResult, McpError> {
    let json = to_json(&chart)?;
    Ok(CallToolResult::success(vec![
        Content::image(chart.png_base64, chart.mime_type),
        Content::text(json),
    ]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BestinutService {
    // --- Status ---

    #[tool(description = "Get the current status of the BestiNut service including build info, database status, and process information")]
    async fn bestinut_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = to_json(&status)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for building a diet plan: required profile fields, accepted activity levels and goals, and how to present the result. Call this before the first estimate_diet_plan.")]
    fn diet_plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::DIET_PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(DIET_PLAN_INSTRUCTIONS)]))
    }

    // --- Diet Plan ---

    #[tool(description = "Estimate BMR, TDEE, BMI, daily macro targets, meal suggestions and recommendations from a personal profile. Missing or invalid fields are reported with success=false.")]
    fn estimate_diet_plan(&self, Parameters(p): Parameters<EstimateDietPlanParams>) -> Result<CallToolResult, McpError> {
        let outcome = plans::estimate_diet_plan(&ProfileForm::from(p));
        let json = to_json(&outcome)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Food Scan ---

    #[tool(description = "Identify the food in a photo and estimate its nutrition. Pass file_path, or image_base64 with mime_type. Results are simulated.")]
    fn scan_food_image(&self, Parameters(p): Parameters<ScanFoodImageParams>) -> Result<CallToolResult, McpError> {
        let mut classifier = self.classifier.lock()
            .map_err(|e| McpError::internal_error(format!("Classifier unavailable: {}", e), None))?;

        let json = match (p.file_path, p.image_base64) {
            (Some(path), _) => {
                let result = food_scan::scan_food_image(&mut *classifier, &path)
                    .map_err(|e| McpError::internal_error(e, None))?;
                to_json(&result)?
            }
            (None, Some(data)) => {
                let bytes = STANDARD.decode(data.trim())
                    .map_err(|e| McpError::invalid_params(format!("Invalid base64 image: {}", e), None))?;
                let mime_type = p.mime_type.as_deref().unwrap_or("image/jpeg");
                let payload = ImagePayload::new(mime_type, bytes);
                let analysis = food_scan::scan_payload(&mut *classifier, &payload)
                    .map_err(|e| McpError::internal_error(e, None))?;
                to_json(&ScanPayloadResponse {
                    message: format!("Identified {} (simulated result)", analysis.food_name),
                    analysis,
                })?
            }
            (None, None) => {
                return Err(McpError::invalid_params("Provide file_path or image_base64", None));
            }
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Assistant ---

    #[tool(description = "Ask the nutrition assistant a question about calories, protein, diet, exercise or weight")]
    async fn ask_assistant(&self, Parameters(p): Parameters<AskAssistantParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.chat.lock().await;
        let result = chat::ask_assistant(&mut session, &p.message)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Open or close the assistant chat window")]
    async fn toggle_assistant(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.chat.lock().await;
        let json = to_json(&chat::toggle_assistant(&mut session))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Start or stop voice command recording")]
    async fn toggle_voice_command(&self) -> Result<CallToolResult, McpError> {
        let mut voice = self.voice.lock().await;
        let json = to_json(&chat::toggle_voice_command(&mut voice))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Map a voice or typed navigation command to an app section (home, ai-diet, meal-tracker, analytics, community, chatbot). Stops any voice recording.")]
    async fn route_voice_command(&self, Parameters(p): Parameters<RouteVoiceCommandParams>) -> Result<CallToolResult, McpError> {
        let mut voice = self.voice.lock().await;
        let json = to_json(&chat::route_voice_command(&mut voice, &p.transcript))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Charts ---

    #[tool(description = "Render a weight trend line chart as a PNG image. Uses sample data when no points are given.")]
    fn render_weight_chart(&self, Parameters(p): Parameters<RenderWeightChartParams>) -> Result<CallToolResult, McpError> {
        let points = p.points.map(|points| {
            points.into_iter()
                .map(|pt| WeightPoint { label: pt.label, weight_kg: pt.weight_kg })
                .collect()
        });
        let chart = charts::render_weight_chart(points, p.output_path.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        chart_result(chart)
    }

    #[tool(description = "Render the protein/carbohydrate/fat share of daily calories as a PNG bar chart. Pass the daily targets from estimate_diet_plan.")]
    fn render_macro_chart(&self, Parameters(p): Parameters<RenderMacroChartParams>) -> Result<CallToolResult, McpError> {
        let targets = p.targets().map_err(|e| McpError::invalid_params(e, None))?;
        let chart = charts::render_macro_chart(&targets, p.output_path.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        chart_result(chart)
    }

    // --- Preferences ---

    #[tool(description = "Get the stored UI theme (defaults to light)")]
    fn get_theme(&self) -> Result<CallToolResult, McpError> {
        let result = preferences::get_theme(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Store the UI theme preference")]
    fn set_theme(&self, Parameters(p): Parameters<SetThemeParams>) -> Result<CallToolResult, McpError> {
        let result = preferences::set_theme(&self.database, &p.theme).map_err(|e| McpError::internal_error(e, None))?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for BestinutService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bestinut".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BestiNut Diet & Nutrition".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BestiNut - personal diet plans and nutrition help. \
                 IMPORTANT: Call diet_plan_instructions before building a plan. \
                 Plans: estimate_diet_plan (BMR, TDEE, BMI, macros, meals, recommendations). \
                 Food photos: scan_food_image (simulated recognition). \
                 Assistant: ask_assistant, toggle_assistant, toggle_voice_command, route_voice_command. \
                 Charts: render_weight_chart, render_macro_chart (PNG images). \
                 Preferences: get_theme, set_theme. \
                 Service: bestinut_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> EstimateDietPlanParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_params_to_form() {
        let form = ProfileForm::from(params(json!({
            "name": "Budi",
            "age": 25,
            "sex": "male",
            "weight_kg": 70,
            "height_cm": 175.5,
            "activity_level": "moderate"
        })));
        assert_eq!(form.age.as_deref(), Some("25"));
        assert_eq!(form.weight_kg.as_deref(), Some("70"));
        assert_eq!(form.height_cm.as_deref(), Some("175.5"));
        assert!(form.goal.is_none());
    }

    #[test]
    fn test_numeric_text_is_accepted() {
        let form = ProfileForm::from(params(json!({
            "age": "25",
            "weight_kg": "70.5",
            "height_cm": null
        })));
        assert_eq!(form.age.as_deref(), Some("25"));
        assert_eq!(form.weight_kg.as_deref(), Some("70.5"));
        assert!(form.height_cm.is_none());
    }

    #[test]
    fn test_params_without_goal_are_rejected() {
        let form = ProfileForm::from(params(json!({
            "name": "Budi",
            "age": 25,
            "sex": "male",
            "weight_kg": 70,
            "height_cm": 175,
            "activity_level": "moderate"
        })));
        match plans::estimate_diet_plan(&form) {
            plans::EstimateOutcome::Invalid(i) => {
                assert_eq!(i.invalid_fields, vec!["goal is required".to_string()]);
            }
            plans::EstimateOutcome::Plan(_) => panic!("plan without goal"),
        }
    }

    #[test]
    fn test_non_numeric_weight_reaches_validation() {
        let form = ProfileForm::from(params(json!({
            "name": "Budi",
            "age": 25,
            "sex": "male",
            "weight_kg": "seventy",
            "height_cm": 175,
            "activity_level": "moderate",
            "goal": "maintain"
        })));
        match plans::estimate_diet_plan(&form) {
            plans::EstimateOutcome::Invalid(i) => {
                assert!(!i.success);
                assert_eq!(i.invalid_fields, vec!["weight_kg must be a number".to_string()]);
            }
            plans::EstimateOutcome::Plan(_) => panic!("text weight accepted"),
        }
    }

    fn macro_params(value: serde_json::Value) -> RenderMacroChartParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_macro_params_reject_negative_grams() {
        let err = macro_params(json!({
            "protein_grams": 100,
            "carb_grams": -5,
            "fat_grams": 60
        }))
        .targets()
        .unwrap_err();
        assert_eq!(err, "carb_grams must not be negative (got -5)");
    }

    #[test]
    fn test_macro_params_calories_optional() {
        let targets = macro_params(json!({
            "protein_grams": 162,
            "carb_grams": 292,
            "fat_grams": 86
        }))
        .targets()
        .unwrap();
        // 162*4 + 292*4 + 86*9
        assert_eq!(targets.calories, 2590);

        let targets = macro_params(json!({
            "calories": 2594,
            "protein_grams": 162,
            "carb_grams": 292,
            "fat_grams": 86
        }))
        .targets()
        .unwrap();
        assert_eq!(targets.calories, 2594);
    }
}
