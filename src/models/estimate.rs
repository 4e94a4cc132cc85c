//! Estimate models
//!
//! Value objects produced by the nutrition estimator. Nothing here is stored;
//! every plan is recomputed from its profile on request.

use serde::{Deserialize, Serialize};

/// Body mass classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Lower bound of the normal range
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the overweight range
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obese range
    pub const OBESE_MIN: f64 = 30.0;

    /// Classify a BMI value. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < Self::OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < Self::OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Energy figures for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub bmr: i64,           // kcal/day
    pub tdee: i64,          // kcal/day, after goal adjustment
    pub bmi: f64,           // one decimal
    pub bmi_category: BmiCategory,
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
}

impl MacroTargets {
    /// Calories accounted for by the gram targets
    pub fn energy_from_grams(&self) -> i64 {
        4 * self.protein_grams + 4 * self.carb_grams + 9 * self.fat_grams
    }
}

/// Recommendation severity, used by renderers to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }
}

/// A single piece of advice attached to a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Recommendation {
    pub fn new(severity: Severity, title: &str, message: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result of estimating a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub energy: EnergyEstimate,
    pub macros: MacroTargets,
    pub recommendations: Vec<Recommendation>,
}

/// Menu ideas per meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSuggestions {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snacks: Vec<String>,
}

/// Everything a renderer needs to show a personal diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub name: String,
    pub energy: EnergyEstimate,
    pub macros: MacroTargets,
    pub meals: MealSuggestions,
    pub recommendations: Vec<Recommendation>,
}
