//! Energy expenditure formulas
//!
//! BMR (Mifflin-St Jeor), activity and goal adjustments, and BMI.

use crate::models::{ActivityLevel, BmiCategory, Goal, Sex};

// ============================================================================
// Mifflin-St Jeor Coefficients
// ============================================================================

/// kcal per kg of body weight
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// kcal per cm of height
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// kcal per year of age (subtracted)
pub const MSJ_AGE_COEF: f64 = 5.0;
/// Constant added for males
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Constant added for females
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

// ============================================================================
// Multiplier Tables
// ============================================================================

/// Multiplier used when the activity level is not recognized
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;
/// Multiplier used when the goal is not recognized
pub const DEFAULT_GOAL_MULTIPLIER: f64 = 1.0;

/// Basal metabolic rate in kcal/day, unrounded
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let constant = match sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };
    MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * f64::from(age)
        + constant
}

/// Activity multiplier applied to BMR
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
        ActivityLevel::Unknown => DEFAULT_ACTIVITY_MULTIPLIER,
    }
}

/// Calorie adjustment for the user's goal
pub fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 0.85,
        Goal::WeightGain => 1.15,
        Goal::Maintain => 1.0,
        Goal::MuscleGain => 1.1,
        Goal::HealthyLifestyle => 1.0,
        Goal::Unknown => DEFAULT_GOAL_MULTIPLIER,
    }
}

/// Goal-adjusted total daily energy expenditure, unrounded.
///
/// Takes the unrounded BMR; rounding happens only when the value is displayed.
pub fn tdee(bmr: f64, level: ActivityLevel, goal: Goal) -> f64 {
    bmr * activity_multiplier(level) * goal_multiplier(goal)
}

/// Body mass index, unrounded
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// BMI category of the unrounded value
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        // 700 + 1093.75 - 125 + 5
        let value = bmr(70.0, 175.0, 25, Sex::Male);
        assert!((value - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_sex_difference() {
        for (w, h, a) in [(70.0, 175.0, 25), (52.3, 158.0, 61), (110.0, 190.5, 40)] {
            let diff = bmr(w, h, a, Sex::Male) - bmr(w, h, a, Sex::Female);
            assert!((diff - 166.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Active), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::VeryActive), 1.9);
        assert_eq!(activity_multiplier(ActivityLevel::Unknown), 1.2);
    }

    #[test]
    fn test_goal_multipliers() {
        assert_eq!(goal_multiplier(Goal::WeightLoss), 0.85);
        assert_eq!(goal_multiplier(Goal::WeightGain), 1.15);
        assert_eq!(goal_multiplier(Goal::Maintain), 1.0);
        assert_eq!(goal_multiplier(Goal::MuscleGain), 1.1);
        assert_eq!(goal_multiplier(Goal::HealthyLifestyle), 1.0);
        assert_eq!(goal_multiplier(Goal::Unknown), 1.0);
    }

    #[test]
    fn test_tdee_uses_unrounded_bmr() {
        // 1673.75 * 1.55 = 2594.3125, while 1674 * 1.55 would be 2594.7
        let value = tdee(1673.75, ActivityLevel::Moderate, Goal::Maintain);
        assert!((value - 2594.3125).abs() < 1e-6);
        assert_eq!(value.round(), 2594.0);
    }

    #[test]
    fn test_bmi() {
        let value = bmi(50.0, 160.0);
        assert!((value - 19.53125).abs() < 1e-9);
        assert_eq!(round_to_tenth(value), 19.5);
        assert_eq!(classify_bmi(value), BmiCategory::Normal);
    }

    #[test]
    fn test_round_to_tenth_halves_away_from_zero() {
        assert_eq!(round_to_tenth(22.25), 22.3);
        assert_eq!(round_to_tenth(22.24), 22.2);
        assert_eq!(round_to_tenth(30.0), 30.0);
    }
}
