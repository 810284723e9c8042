use std::path::PathBuf;
use std::time::Duration;

use crate::domain::classification::value_objects::{ImageDimensions, InputLayout};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriLensConfig {
    pub classifier: ClassifierConfig,
    pub nutrition: NutritionConfig,
    pub assistant: AssistantConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub model_path: PathBuf,
    pub input_dimensions: ImageDimensions,
    pub input_layout: InputLayout,
}

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    pub usda_api_key: Option<String>,
    pub usda_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
}

/// Rounds to one decimal place and clamps to zero. Nutrient amounts are never negative.
pub fn round_amount(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}
