//! Nutrition estimation module
//!
//! Energy formulas, macro targets, recommendation rules and the estimator
//! that combines them.

pub mod energy;
pub mod estimator;
pub mod macros;
pub mod meals;
pub mod recommendations;

pub use energy::{activity_multiplier, bmi, bmr, goal_multiplier, round_to_tenth, tdee};
pub use estimator::{diet_plan, diet_plan_from_form, estimate};
pub use macros::{macro_breakdown, macro_targets, MacroBreakdown};
pub use meals::meal_suggestions;
pub use recommendations::recommendations;
