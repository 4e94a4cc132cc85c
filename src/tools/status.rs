//! BestiNut Status Tool
//!
//! Provides runtime status information about the BestiNut service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Diet plan instructions for AI assistants
pub const DIET_PLAN_INSTRUCTIONS: &str = r#"
# BestiNut Diet Plan Instructions

This guide explains how to build a personal diet plan with the BestiNut tools.

## Overview

A diet plan is computed from a short profile:

| Field | Type | Notes |
|-------|------|-------|
| name | text | Required, shown in the plan header |
| age | years | Required, must be greater than zero |
| sex | "male" / "female" | Required; anything other than "male" uses the female equation |
| weight_kg | kilograms | Required, must be greater than zero |
| height_cm | centimetres | Required, must be greater than zero |
| activity_level | see below | Required |
| goal | see below | Required |
| allergies | text | Optional, recorded only |
| preferences | text | Optional, recorded only |

If any required field is missing or invalid, `estimate_diet_plan` answers with
`success: false` and lists every field to fix. Ask the user for those values
and call the tool again.

---

## Activity Levels

| Value | Meaning | Multiplier |
|-------|---------|------------|
| sedentary | Little or no exercise | 1.2 |
| light | Exercise 1-3 days/week | 1.375 |
| moderate | Exercise 3-5 days/week | 1.55 |
| active | Exercise 6-7 days/week | 1.725 |
| very-active | Hard exercise or physical job | 1.9 |

Unrecognised values fall back to 1.2 without triggering the sedentary advice.

## Goals

| Value | Calorie adjustment |
|-------|--------------------|
| weight-loss | -15% |
| weight-gain | +15% |
| muscle-gain | +10% |
| maintain | none |
| healthy-lifestyle | none |

---

## What the Plan Contains

1. **BMR** - Mifflin-St Jeor basal metabolic rate (kcal/day)
2. **TDEE** - BMR x activity multiplier x goal adjustment (kcal/day)
3. **BMI** - one decimal, with category (Underweight / Normal / Overweight / Obese)
4. **Daily targets** - protein 25%, carbohydrate 45%, fat 30% of TDEE in grams
5. **Meal suggestions** - breakfast, lunch, dinner and snacks
6. **Recommendations** - short advice based on BMI, goal and activity

## Presenting the Result

- Quote calories as whole numbers and macros in grams ("162g").
- Read recommendations in the order returned; the severity (info, warning,
  success) can be used for emphasis.
- Results are estimates. Suggest a professional consultation for medical
  conditions.

## Related Tools

- `render_macro_chart` - pass the daily targets to draw the macro split
- `render_weight_chart` - draw a weight trend (sample data when none given)
- `scan_food_image` - simulated food recognition from a photo
- `ask_assistant` - canned answers about calories, protein, diet, exercise and weight
"#;

/// Runtime status of the BestiNut service
#[derive(Debug, Clone, Serialize)]
pub struct BestinutStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> BestinutStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BestinutStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/bestinut.db"));
        let status = tracker.get_status();
        assert_eq!(status.database_path, "/nonexistent/bestinut.db");
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_instructions_cover_every_activity_level() {
        for level in ["sedentary", "light", "moderate", "active", "very-active"] {
            assert!(DIET_PLAN_INSTRUCTIONS.contains(level), "missing {}", level);
        }
    }
}
