//! Food scan MCP tools
//!
//! Runs an uploaded food photo through the (simulated) classifier.

use serde::Serialize;

use crate::recognition::{FoodAnalysis, FoodClassifier, ImagePayload};

/// Response for scan_food_image
#[derive(Debug, Serialize)]
pub struct ScanFoodResponse {
    pub file_path: String,
    pub analysis: FoodAnalysis,
    pub message: String,
}

/// Classify the image stored at `file_path`
pub fn scan_food_image<C: FoodClassifier + ?Sized>(
    classifier: &mut C,
    file_path: &str,
) -> Result<ScanFoodResponse, String> {
    let payload = ImagePayload::from_file(file_path)
        .map_err(|e| format!("Failed to load '{}': {}", file_path, e))?;

    scan_payload(classifier, &payload).map(|analysis| ScanFoodResponse {
        file_path: file_path.to_string(),
        message: format!(
            "Identified {} with {:.1}% confidence (simulated result)",
            analysis.food_name, analysis.confidence_percent
        ),
        analysis,
    })
}

/// Classify an in-memory payload
pub fn scan_payload<C: FoodClassifier + ?Sized>(
    classifier: &mut C,
    payload: &ImagePayload,
) -> Result<FoodAnalysis, String> {
    classifier.classify(payload).map_err(|e| e.to_string())
}
