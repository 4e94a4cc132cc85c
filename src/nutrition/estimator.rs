//! Nutrition estimator
//!
//! Turns a profile into energy figures, macro targets and recommendations.
//! Pure and reentrant: nothing is cached between calls.
//!
//! Rounding: BMR and TDEE are kept unrounded through the multiplications and
//! rounded to whole kcal only for display. Macro targets use the unrounded
//! goal-adjusted TDEE. BMI is shown to one decimal, halves away from zero,
//! and classified from its unrounded value.

use crate::models::{DietPlan, EnergyEstimate, Estimate, ProfileForm, UserProfile, ValidationError};

use super::energy::{bmi, bmr, classify_bmi, round_to_tenth, tdee};
use super::macros::macro_targets;
use super::meals::meal_suggestions;
use super::recommendations::recommendations;

/// Estimate energy needs, macro targets and advice for a profile.
///
/// Fails without computing anything when the profile breaks its invariants.
pub fn estimate(profile: &UserProfile) -> Result<Estimate, ValidationError> {
    profile.validate()?;

    let bmr_kcal = bmr(profile.weight_kg, profile.height_cm, profile.age, profile.sex);
    let tdee_kcal = tdee(bmr_kcal, profile.activity_level, profile.goal);
    let bmi_value = bmi(profile.weight_kg, profile.height_cm);

    let energy = EnergyEstimate {
        bmr: bmr_kcal.round() as i64,
        tdee: tdee_kcal.round() as i64,
        bmi: round_to_tenth(bmi_value),
        bmi_category: classify_bmi(bmi_value),
    };

    tracing::debug!(
        "Estimated {}: bmr={:.2} tdee={:.2} bmi={:.3} ({})",
        profile.name,
        bmr_kcal,
        tdee_kcal,
        bmi_value,
        energy.bmi_category.as_str()
    );

    Ok(Estimate {
        energy,
        macros: macro_targets(tdee_kcal),
        recommendations: recommendations(profile, bmi_value),
    })
}

/// Full diet plan for a profile, including meal suggestions
pub fn diet_plan(profile: &UserProfile) -> Result<DietPlan, ValidationError> {
    let estimate = estimate(profile)?;
    Ok(DietPlan {
        name: profile.name.clone(),
        energy: estimate.energy,
        macros: estimate.macros,
        meals: meal_suggestions(),
        recommendations: estimate.recommendations,
    })
}

/// Validate raw form values and build the diet plan in one step
pub fn diet_plan_from_form(form: &ProfileForm) -> Result<DietPlan, ValidationError> {
    let profile = form.validate()?;
    diet_plan(&profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, BmiCategory, Goal, ProfileField, Severity, Sex};

    fn scenario_profile() -> UserProfile {
        UserProfile {
            name: "Budi".to_string(),
            age: 25,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            allergies: None,
            preferences: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = estimate(&scenario_profile()).unwrap();
        assert_eq!(result.energy.bmr, 1674);
        assert_eq!(result.energy.tdee, 2594);
        assert_eq!(result.energy.bmi, 22.9);
        assert_eq!(result.energy.bmi_category, BmiCategory::Normal);
        assert_eq!(result.macros.calories, 2594);
        assert_eq!(result.macros.protein_grams, 162);
        assert_eq!(result.macros.carb_grams, 292);
        assert_eq!(result.macros.fat_grams, 86);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_female_bmr_is_166_lower() {
        let male = estimate(&scenario_profile()).unwrap();
        let female = estimate(&UserProfile { sex: Sex::Female, ..scenario_profile() }).unwrap();
        // 1673.75 - 166 = 1507.75
        assert_eq!(female.energy.bmr, 1508);
        assert_eq!(male.energy.bmr - female.energy.bmr, 166);
    }

    #[test]
    fn test_small_person_bmi() {
        let profile = UserProfile {
            weight_kg: 50.0,
            height_cm: 160.0,
            sex: Sex::Female,
            ..scenario_profile()
        };
        let result = estimate(&profile).unwrap();
        assert_eq!(result.energy.bmi, 19.5);
        assert_eq!(result.energy.bmi_category, BmiCategory::Normal);
    }

    #[test]
    fn test_goal_adjustment_applies_after_activity() {
        let loss = estimate(&UserProfile { goal: Goal::WeightLoss, ..scenario_profile() }).unwrap();
        // 1673.75 * 1.55 * 0.85 = 2205.165625
        assert_eq!(loss.energy.tdee, 2205);
        assert_eq!(loss.macros.calories, 2205);
    }

    #[test]
    fn test_unknown_levels_use_defaults() {
        let profile = UserProfile {
            activity_level: ActivityLevel::Unknown,
            goal: Goal::Unknown,
            ..scenario_profile()
        };
        let result = estimate(&profile).unwrap();
        // 1673.75 * 1.2 * 1.0 = 2008.5
        assert_eq!(result.energy.tdee, 2009);
    }

    #[test]
    fn test_energy_is_positive_for_typical_profiles() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
            ActivityLevel::Unknown,
        ];
        let goals = [
            Goal::WeightLoss,
            Goal::WeightGain,
            Goal::Maintain,
            Goal::MuscleGain,
            Goal::HealthyLifestyle,
            Goal::Unknown,
        ];
        for (i, level) in levels.iter().enumerate() {
            for goal in goals.iter() {
                for sex in [Sex::Male, Sex::Female] {
                    let profile = UserProfile {
                        age: 18 + (i as u32) * 12,
                        sex,
                        weight_kg: 45.0 + (i as f64) * 15.0,
                        height_cm: 150.0 + (i as f64) * 8.0,
                        activity_level: *level,
                        goal: *goal,
                        ..scenario_profile()
                    };
                    let result = estimate(&profile).unwrap();
                    assert!(result.energy.bmr > 0);
                    assert!(result.energy.tdee > 0);
                }
            }
        }
    }

    #[test]
    fn test_sedentary_obese_muscle_gain_recommendations() {
        let profile = UserProfile {
            weight_kg: 100.0,
            height_cm: 170.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::MuscleGain,
            ..scenario_profile()
        };
        let result = estimate(&profile).unwrap();
        assert_eq!(result.energy.bmi_category, BmiCategory::Obese);
        let severities: Vec<Severity> = result.recommendations.iter().map(|r| r.severity).collect();
        assert_eq!(severities, vec![Severity::Info, Severity::Success, Severity::Warning]);
    }

    #[test]
    fn test_invalid_profile_produces_no_estimate() {
        let profile = UserProfile { weight_kg: -70.0, ..scenario_profile() };
        let err = estimate(&profile).unwrap_err();
        assert!(err.has_field(ProfileField::Weight));
    }

    #[test]
    fn test_form_missing_age_is_validation_error() {
        let form = ProfileForm {
            name: Some("Budi".to_string()),
            age: None,
            sex: Some("male".to_string()),
            weight_kg: Some("70".to_string()),
            height_cm: Some("175".to_string()),
            activity_level: Some("moderate".to_string()),
            goal: Some("maintain".to_string()),
            ..ProfileForm::default()
        };
        let err = diet_plan_from_form(&form).unwrap_err();
        assert!(err.has_field(ProfileField::Age));
    }

    #[test]
    fn test_diet_plan_carries_name_and_meals() {
        let plan = diet_plan(&scenario_profile()).unwrap();
        assert_eq!(plan.name, "Budi");
        assert_eq!(plan.energy.tdee, 2594);
        assert_eq!(plan.meals.breakfast.len(), 4);
    }
}
