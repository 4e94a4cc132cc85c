//! Macronutrient targets
//!
//! Fixed percentage split of daily calories into protein, carbohydrate and fat.

use serde::Serialize;

use crate::models::MacroTargets;

/// Share of calories from protein
pub const PROTEIN_SHARE: f64 = 0.25;
/// Share of calories from carbohydrate
pub const CARB_SHARE: f64 = 0.45;
/// Share of calories from fat
pub const FAT_SHARE: f64 = 0.30;

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Split a goal-adjusted, unrounded TDEE into daily targets
pub fn macro_targets(tdee: f64) -> MacroTargets {
    MacroTargets {
        calories: tdee.round() as i64,
        protein_grams: (tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN).round() as i64,
        carb_grams: (tdee * CARB_SHARE / KCAL_PER_G_CARB).round() as i64,
        fat_grams: (tdee * FAT_SHARE / KCAL_PER_G_FAT).round() as i64,
    }
}

/// Percentage of energy per macronutrient, as charted in the macro breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

/// Energy share of each macronutrient computed from the gram targets.
///
/// Returns `None` when the targets carry no energy.
pub fn macro_breakdown(targets: &MacroTargets) -> Option<MacroBreakdown> {
    let protein_kcal = targets.protein_grams as f64 * KCAL_PER_G_PROTEIN;
    let carb_kcal = targets.carb_grams as f64 * KCAL_PER_G_CARB;
    let fat_kcal = targets.fat_grams as f64 * KCAL_PER_G_FAT;
    let total = protein_kcal + carb_kcal + fat_kcal;

    if total <= 0.0 {
        return None;
    }

    Some(MacroBreakdown {
        protein_percent: protein_kcal / total * 100.0,
        carbs_percent: carb_kcal / total * 100.0,
        fat_percent: fat_kcal / total * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_targets_from_scenario_tdee() {
        let targets = macro_targets(2594.3125);
        assert_eq!(targets.calories, 2594);
        assert_eq!(targets.protein_grams, 162); // 162.14
        assert_eq!(targets.carb_grams, 292); // 291.86
        assert_eq!(targets.fat_grams, 86); // 86.48
    }

    #[test]
    fn test_grams_account_for_calories() {
        for tdee in [1187.4, 1500.0, 1999.99, 2594.3125, 3120.6, 4211.0] {
            let targets = macro_targets(tdee);
            let diff = (targets.energy_from_grams() - targets.calories).abs();
            // per-gram rounding bounds the drift at 2 + 2 + 4.5 kcal
            assert!(diff <= 9, "tdee {} off by {}", tdee, diff);
        }
    }

    #[test]
    fn test_macro_breakdown_sums_to_hundred() {
        let breakdown = macro_breakdown(&macro_targets(2000.0)).unwrap();
        let total = breakdown.protein_percent + breakdown.carbs_percent + breakdown.fat_percent;
        assert!((total - 100.0).abs() < 1e-9);
        assert!((breakdown.protein_percent - 25.0).abs() < 0.5);
        assert!((breakdown.carbs_percent - 45.0).abs() < 0.5);
        assert!((breakdown.fat_percent - 30.0).abs() < 0.5);
    }

    #[test]
    fn test_macro_breakdown_empty_targets() {
        let empty = MacroTargets { calories: 0, protein_grams: 0, carb_grams: 0, fat_grams: 0 };
        assert!(macro_breakdown(&empty).is_none());
    }
}
