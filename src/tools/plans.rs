//! Diet plan MCP tools
//!
//! Validates a submitted profile and returns the computed diet plan in a
//! shape ready for rendering.

use serde::Serialize;

use crate::models::{DietPlan, MealSuggestions, ProfileForm, Recommendation};
use crate::nutrition::{diet_plan_from_form, macro_breakdown, MacroBreakdown};

/// Energy figures with display labels
#[derive(Debug, Serialize)]
pub struct EnergySummary {
    pub bmr_kcal: i64,
    pub tdee_kcal: i64,
    pub bmi: f64,
    pub bmi_category: String,
}

/// Daily targets as displayed
#[derive(Debug, Serialize)]
pub struct TargetsSummary {
    pub calories: i64,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub breakdown: Option<MacroBreakdown>,
}

/// Response for estimate_diet_plan
#[derive(Debug, Serialize)]
pub struct DietPlanResponse {
    pub success: bool,
    pub name: String,
    pub energy: EnergySummary,
    pub daily_targets: TargetsSummary,
    pub meals: MealSuggestions,
    pub recommendations: Vec<Recommendation>,
}

/// Response when the submitted profile is incomplete
#[derive(Debug, Serialize)]
pub struct InvalidProfileResponse {
    pub success: bool,
    pub message: String,
    pub invalid_fields: Vec<String>,
}

/// Outcome of a plan request: either a plan or the fields to fix
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EstimateOutcome {
    Plan(DietPlanResponse),
    Invalid(InvalidProfileResponse),
}

impl From<DietPlan> for DietPlanResponse {
    fn from(plan: DietPlan) -> Self {
        Self {
            success: true,
            name: plan.name,
            energy: EnergySummary {
                bmr_kcal: plan.energy.bmr,
                tdee_kcal: plan.energy.tdee,
                bmi: plan.energy.bmi,
                bmi_category: plan.energy.bmi_category.as_str().to_string(),
            },
            daily_targets: TargetsSummary {
                calories: plan.macros.calories,
                protein: format!("{}g", plan.macros.protein_grams),
                carbs: format!("{}g", plan.macros.carb_grams),
                fat: format!("{}g", plan.macros.fat_grams),
                breakdown: macro_breakdown(&plan.macros),
            },
            meals: plan.meals,
            recommendations: plan.recommendations,
        }
    }
}

/// Estimate a diet plan from submitted form values.
///
/// Validation failures are part of the normal response, not tool errors,
/// so the caller can show the message to the user.
pub fn estimate_diet_plan(form: &ProfileForm) -> EstimateOutcome {
    match diet_plan_from_form(form) {
        Ok(plan) => {
            tracing::info!(
                "Diet plan for {}: {} kcal/day ({})",
                plan.name,
                plan.energy.tdee,
                plan.energy.bmi_category.as_str()
            );
            EstimateOutcome::Plan(plan.into())
        }
        Err(e) => {
            tracing::warn!("Rejected profile: {}", e);
            EstimateOutcome::Invalid(InvalidProfileResponse {
                success: false,
                message: e.to_string(),
                invalid_fields: e.fields.iter().map(|f| f.to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            name: Some("Rina".to_string()),
            age: Some("40".to_string()),
            sex: Some("female".to_string()),
            weight_kg: Some("48".to_string()),
            height_cm: Some("165".to_string()),
            activity_level: Some("sedentary".to_string()),
            goal: Some("weight-gain".to_string()),
            allergies: None,
            preferences: None,
        }
    }

    #[test]
    fn test_plan_response() {
        let outcome = estimate_diet_plan(&form());
        let plan = match outcome {
            EstimateOutcome::Plan(p) => p,
            EstimateOutcome::Invalid(i) => panic!("unexpected rejection: {}", i.message),
        };
        // 480 + 1031.25 - 200 - 161 = 1150.25
        assert_eq!(plan.energy.bmr_kcal, 1150);
        // 1150.25 * 1.2 * 1.15 = 1587.345
        assert_eq!(plan.energy.tdee_kcal, 1587);
        assert_eq!(plan.energy.bmi, 17.6);
        assert_eq!(plan.energy.bmi_category, "Underweight");
        assert_eq!(plan.daily_targets.protein, "99g");
        assert_eq!(plan.recommendations.len(), 2);
        assert_eq!(plan.recommendations[0].title, "Low Body Weight");
        assert_eq!(plan.recommendations[1].title, "Physical Activity");
    }

    #[test]
    fn test_invalid_response() {
        let outcome = estimate_diet_plan(&ProfileForm { height_cm: Some("0".to_string()), ..form() });
        match outcome {
            EstimateOutcome::Invalid(i) => {
                assert!(!i.success);
                assert_eq!(i.invalid_fields, vec!["height_cm must be greater than zero".to_string()]);
            }
            EstimateOutcome::Plan(_) => panic!("zero height accepted"),
        }
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let json = serde_json::to_value(estimate_diet_plan(&form())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["name"], "Rina");
        assert_eq!(json["daily_targets"]["calories"], 1587);
    }
}
