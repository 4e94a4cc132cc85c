//! Food image recognition
//!
//! Only a simulated classifier exists; see `MockFoodClassifier`.

pub mod classifier;
pub mod foods;

pub use classifier::{
    FoodAnalysis, FoodClassifier, FoodNutrition, ImagePayload, MockFoodClassifier, ScanError,
};
pub use foods::{find_food, KnownFood, KNOWN_FOODS};
