//! Data models
//!
//! Profiles, estimate value objects and the stored theme preference.

mod estimate;
mod preferences;
mod profile;

pub use estimate::{
    BmiCategory, DietPlan, EnergyEstimate, Estimate, MacroTargets, MealSuggestions,
    Recommendation, Severity,
};
pub use preferences::ThemePreference;
pub use profile::{
    ActivityLevel, FieldError, FieldProblem, Goal, ProfileField, ProfileForm, Sex, UserProfile,
    ValidationError,
};
