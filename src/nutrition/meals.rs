//! Meal suggestions
//!
//! Static menu ideas shown alongside every diet plan.

use crate::models::MealSuggestions;

const BREAKFAST: [&str; 4] = [
    "Oatmeal with fruit and almonds",
    "Scrambled eggs with whole-wheat toast",
    "Smoothie bowl with protein powder",
    "Greek yogurt with granola and honey",
];

const LUNCH: [&str; 4] = [
    "Grilled chicken with quinoa and vegetables",
    "Tuna salad with avocado and greens",
    "Brown rice with tempeh and vegetables",
    "Whole-wheat chicken and vegetable sandwich",
];

const DINNER: [&str; 4] = [
    "Salmon with sweet potato and broccoli",
    "Chicken breast with potatoes and carrots",
    "Tofu with brown rice and vegetables",
    "Chicken vegetable soup with whole-wheat noodles",
];

const SNACKS: [&str; 4] = [
    "Apple with peanut butter",
    "Almonds and dates",
    "Greek yogurt with berries",
    "Protein shake",
];

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The menu ideas for each meal of the day
pub fn meal_suggestions() -> MealSuggestions {
    MealSuggestions {
        breakfast: to_owned(&BREAKFAST),
        lunch: to_owned(&LUNCH),
        dinner: to_owned(&DINNER),
        snacks: to_owned(&SNACKS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_meal_has_four_ideas() {
        let meals = meal_suggestions();
        assert_eq!(meals.breakfast.len(), 4);
        assert_eq!(meals.lunch.len(), 4);
        assert_eq!(meals.dinner.len(), 4);
        assert_eq!(meals.snacks.len(), 4);
        assert_eq!(meals.snacks[3], "Protein shake");
    }
}
