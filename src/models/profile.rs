//! User profile model
//!
//! The profile a diet plan is computed from, plus the raw form values it is
//! validated from. Validation collects every offending field before failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Biological sex used to pick the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse a submitted value. Anything other than "male" uses the female equation.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            _ => Sex::Female,
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
    /// Unrecognized value; estimated like sedentary but never flagged as such
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
            ActivityLevel::Unknown => "unknown",
        }
    }

    /// Parse a submitted value, falling back to `Unknown` instead of failing
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very-active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::Unknown => "Unspecified",
        }
    }
}

/// Diet goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintain,
    MuscleGain,
    HealthyLifestyle,
    /// Unrecognized value; no calorie adjustment is applied
    #[serde(other)]
    Unknown,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::WeightGain => "weight-gain",
            Goal::Maintain => "maintain",
            Goal::MuscleGain => "muscle-gain",
            Goal::HealthyLifestyle => "healthy-lifestyle",
            Goal::Unknown => "unknown",
        }
    }

    /// Parse a submitted value, falling back to `Unknown` instead of failing
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "weight-loss" => Goal::WeightLoss,
            "weight-gain" => Goal::WeightGain,
            "maintain" => Goal::Maintain,
            "muscle-gain" => Goal::MuscleGain,
            "healthy-lifestyle" => Goal::HealthyLifestyle,
            _ => Goal::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::WeightGain => "Weight Gain",
            Goal::Maintain => "Maintain Weight",
            Goal::MuscleGain => "Muscle Gain",
            Goal::HealthyLifestyle => "Healthy Lifestyle",
            Goal::Unknown => "Unspecified",
        }
    }
}

/// A validated user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub allergies: Option<String>,
    pub preferences: Option<String>,
}

impl UserProfile {
    /// Check the invariants of a profile that was built directly rather than
    /// through `ProfileForm::validate`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(ProfileField::Name, FieldProblem::Missing));
        }
        if self.age == 0 {
            errors.push(FieldError::new(ProfileField::Age, FieldProblem::NotPositive));
        }
        if let Some(problem) = check_positive(self.weight_kg) {
            errors.push(FieldError::new(ProfileField::Weight, problem));
        }
        if let Some(problem) = check_positive(self.height_cm) {
            errors.push(FieldError::new(ProfileField::Height, problem));
        }

        ValidationError::from_fields(errors)
    }
}

fn check_positive(value: f64) -> Option<FieldProblem> {
    if !value.is_finite() {
        Some(FieldProblem::NotANumber)
    } else if value <= 0.0 {
        Some(FieldProblem::NotPositive)
    } else {
        None
    }
}

// ============================================================================
// Raw Form Input
// ============================================================================

/// Profile fields exactly as submitted by a form, before any parsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub weight_kg: Option<String>,
    pub height_cm: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub allergies: Option<String>,
    pub preferences: Option<String>,
}

impl ProfileForm {
    /// Parse and validate every field, reporting all problems at once
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let mut errors = Vec::new();

        let name = required(&self.name, ProfileField::Name, &mut errors).map(str::to_string);
        let age = required(&self.age, ProfileField::Age, &mut errors)
            .and_then(|raw| record(parse_age(raw), ProfileField::Age, &mut errors));
        let sex = required(&self.sex, ProfileField::Sex, &mut errors).map(Sex::from_str);
        let weight_kg = required(&self.weight_kg, ProfileField::Weight, &mut errors)
            .and_then(|raw| record(parse_measure(raw), ProfileField::Weight, &mut errors));
        let height_cm = required(&self.height_cm, ProfileField::Height, &mut errors)
            .and_then(|raw| record(parse_measure(raw), ProfileField::Height, &mut errors));
        let activity_level = required(&self.activity_level, ProfileField::ActivityLevel, &mut errors)
            .map(ActivityLevel::from_str);
        let goal = required(&self.goal, ProfileField::Goal, &mut errors).map(Goal::from_str);

        match (name, age, sex, weight_kg, height_cm, activity_level, goal) {
            (
                Some(name),
                Some(age),
                Some(sex),
                Some(weight_kg),
                Some(height_cm),
                Some(activity_level),
                Some(goal),
            ) if errors.is_empty() => Ok(UserProfile {
                name,
                age,
                sex,
                weight_kg,
                height_cm,
                activity_level,
                goal,
                allergies: optional(&self.allergies),
                preferences: optional(&self.preferences),
            }),
            _ => Err(ValidationError { fields: errors }),
        }
    }
}

/// Trimmed value of a required field, recording `Missing` when absent or blank
fn required<'a>(
    value: &'a Option<String>,
    field: ProfileField,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(FieldError::new(field, FieldProblem::Missing));
            None
        }
    }
}

fn record<T>(
    parsed: Result<T, FieldProblem>,
    field: ProfileField,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match parsed {
        Ok(v) => Some(v),
        Err(problem) => {
            errors.push(FieldError::new(field, problem));
            None
        }
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_age(raw: &str) -> Result<u32, FieldProblem> {
    let value: i64 = raw.parse().map_err(|_| FieldProblem::NotANumber)?;
    if value <= 0 {
        return Err(FieldProblem::NotPositive);
    }
    u32::try_from(value).map_err(|_| FieldProblem::NotANumber)
}

fn parse_measure(raw: &str) -> Result<f64, FieldProblem> {
    let value: f64 = raw.parse().map_err(|_| FieldProblem::NotANumber)?;
    match check_positive(value) {
        Some(problem) => Err(problem),
        None => Ok(value),
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Profile field names as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Age,
    Sex,
    Weight,
    Height,
    ActivityLevel,
    Goal,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Age => "age",
            ProfileField::Sex => "sex",
            ProfileField::Weight => "weight_kg",
            ProfileField::Height => "height_cm",
            ProfileField::ActivityLevel => "activity_level",
            ProfileField::Goal => "goal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    NotANumber,
    NotPositive,
}

impl FieldProblem {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldProblem::Missing => "is required",
            FieldProblem::NotANumber => "must be a number",
            FieldProblem::NotPositive => "must be greater than zero",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ProfileField,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: ProfileField, problem: FieldProblem) -> Self {
        Self { field, problem }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.as_str(), self.problem.as_str())
    }
}

/// One or more required profile fields were missing or invalid
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("Please complete all required fields: {}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    fn from_fields(fields: Vec<FieldError>) -> Result<(), Self> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }

    /// Whether the given field was among the failures
    pub fn has_field(&self, field: ProfileField) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
