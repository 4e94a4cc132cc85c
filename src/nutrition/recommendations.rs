//! Recommendation rules
//!
//! Rules are evaluated in a fixed order (body mass, goal, activity) and each
//! one that matches appends a recommendation.

use crate::models::{ActivityLevel, BmiCategory, Goal, Recommendation, Severity, UserProfile};

/// Derive advice for a profile from its unrounded BMI
pub fn recommendations(profile: &UserProfile, bmi: f64) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if bmi < BmiCategory::NORMAL_MIN {
        recs.push(Recommendation::new(
            Severity::Warning,
            "Low Body Weight",
            "Focus on increasing healthy calorie and protein intake.",
        ));
    } else if bmi >= BmiCategory::OVERWEIGHT_MIN {
        recs.push(Recommendation::new(
            Severity::Info,
            "Weight Management",
            "A mild calorie deficit plus regular exercise gives the best results.",
        ));
    }

    if profile.goal == Goal::MuscleGain {
        recs.push(Recommendation::new(
            Severity::Success,
            "Muscle Building",
            "Increase protein intake and strength-train 3-4 times per week.",
        ));
    }

    if profile.activity_level == ActivityLevel::Sedentary {
        recs.push(Recommendation::new(
            Severity::Warning,
            "Physical Activity",
            "Start with 30 minutes of light exercise per day.",
        ));
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn profile(activity_level: ActivityLevel, goal: Goal) -> UserProfile {
        UserProfile {
            name: "Sari".to_string(),
            age: 30,
            sex: Sex::Female,
            weight_kg: 60.0,
            height_cm: 165.0,
            activity_level,
            goal,
            allergies: None,
            preferences: None,
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_normal_bmi_moderate_maintain_has_none() {
        let recs = recommendations(&profile(ActivityLevel::Moderate, Goal::Maintain), 22.0);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_underweight_rule() {
        let recs = recommendations(&profile(ActivityLevel::Moderate, Goal::Maintain), 18.4);
        assert_eq!(titles(&recs), vec!["Low Body Weight"]);
        assert_eq!(recs[0].severity, Severity::Warning);
    }

    #[test]
    fn test_overweight_rule_starts_at_25() {
        let p = profile(ActivityLevel::Moderate, Goal::Maintain);
        assert!(recommendations(&p, 24.99).is_empty());
        let recs = recommendations(&p, 25.0);
        assert_eq!(titles(&recs), vec!["Weight Management"]);
        assert_eq!(recs[0].severity, Severity::Info);
    }

    #[test]
    fn test_bmi_rules_never_fire_together() {
        let p = profile(ActivityLevel::Moderate, Goal::Maintain);
        for tenth in 100..450 {
            let bmi = tenth as f64 / 10.0;
            let recs = recommendations(&p, bmi);
            let both = recs.iter().any(|r| r.title == "Low Body Weight")
                && recs.iter().any(|r| r.title == "Weight Management");
            assert!(!both, "both BMI rules fired at {}", bmi);
        }
    }

    #[test]
    fn test_rule_order() {
        let recs = recommendations(&profile(ActivityLevel::Sedentary, Goal::MuscleGain), 31.0);
        assert_eq!(
            titles(&recs),
            vec!["Weight Management", "Muscle Building", "Physical Activity"]
        );
        assert_eq!(recs[1].severity, Severity::Success);
        assert_eq!(recs[2].severity, Severity::Warning);
    }

    #[test]
    fn test_unknown_activity_is_not_sedentary() {
        let recs = recommendations(&profile(ActivityLevel::Unknown, Goal::Unknown), 22.0);
        assert!(recs.is_empty());
    }
}
