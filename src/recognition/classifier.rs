//! Simulated food image classifier
//!
//! `MockFoodClassifier` does not look at the picture. It checks that the
//! payload is an image and then picks a dish from a fixed table at random.
//! It stands in for a real model behind the `FoodClassifier` trait.

use std::path::Path;

use image::ImageFormat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::foods::{KNOWN_FOODS, SCAN_SUGGESTIONS};
use crate::nutrition::round_to_tenth;

/// Lowest confidence the simulation reports
pub const MIN_CONFIDENCE: f64 = 85.0;
/// Width of the simulated confidence range
pub const CONFIDENCE_SPREAD: f64 = 15.0;
/// Lowest simulated fiber content (grams)
pub const MIN_FIBER_G: f64 = 1.0;
/// Width of the simulated fiber range (grams)
pub const FIBER_SPREAD_G: f64 = 3.0;

/// Errors from scanning a food image
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Please choose an image file (got '{0}')")]
    NotAnImage(String),

    #[error("Image payload is empty")]
    EmptyPayload,

    #[error("Image data is not in a recognized format")]
    UnrecognizedFormat(#[from] image::ImageError),

    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Uploaded image bytes with their declared MIME type
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.trim().to_lowercase(),
            bytes,
        }
    }

    /// Read a file, taking the MIME type from its extension.
    ///
    /// Paths without an image extension are rejected before any I/O.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let mime_type = ImageFormat::from_path(path)
            .map(|f| f.to_mime_type())
            .unwrap_or("application/octet-stream");
        if !mime_type.starts_with("image/") {
            return Err(ScanError::NotAnImage(mime_type.to_string()));
        }
        let bytes = std::fs::read(path)?;
        Ok(Self::new(mime_type, bytes))
    }

    /// Reject anything that is not plausibly an image
    pub fn check(&self) -> Result<ImageFormat, ScanError> {
        if !self.mime_type.starts_with("image/") {
            return Err(ScanError::NotAnImage(self.mime_type.clone()));
        }
        if self.bytes.is_empty() {
            return Err(ScanError::EmptyPayload);
        }
        Ok(image::guess_format(&self.bytes)?)
    }
}

/// Per-portion nutrition reported for a scanned dish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

/// Result of classifying a food image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub food_name: String,
    pub confidence_percent: f64,
    pub nutrition: FoodNutrition,
    pub suggestions: Vec<String>,
    /// Always true for the mock; the result is not based on the image content
    pub simulated: bool,
}

/// Anything that can name the food in a picture
pub trait FoodClassifier {
    fn classify(&mut self, image: &ImagePayload) -> Result<FoodAnalysis, ScanError>;
}

/// Placeholder classifier returning a random known dish
pub struct MockFoodClassifier<R: Rng> {
    rng: R,
}

impl MockFoodClassifier<StdRng> {
    /// Classifier seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> MockFoodClassifier<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodClassifier for MockFoodClassifier<R> {
    fn classify(&mut self, image: &ImagePayload) -> Result<FoodAnalysis, ScanError> {
        let format = image.check()?;

        let food = &KNOWN_FOODS[self.rng.gen_range(0..KNOWN_FOODS.len())];
        let confidence = MIN_CONFIDENCE + self.rng.gen::<f64>() * CONFIDENCE_SPREAD;
        let fiber = MIN_FIBER_G + self.rng.gen::<f64>() * FIBER_SPREAD_G;

        tracing::info!(
            "Simulated scan of {:?} image ({} bytes) -> {}",
            format,
            image.bytes.len(),
            food.name
        );

        Ok(FoodAnalysis {
            food_name: food.name.to_string(),
            confidence_percent: round_to_tenth(confidence),
            nutrition: FoodNutrition {
                calories: food.calories,
                protein_g: food.protein_g,
                carb_g: food.carb_g,
                fat_g: food.fat_g,
                fiber_g: round_to_tenth(fiber),
            },
            suggestions: SCAN_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            simulated: true,
        })
    }
}
