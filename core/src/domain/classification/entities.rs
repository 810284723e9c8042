use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::entities::NutritionRecord;

/// Top prediction of the classifier. `confidence` is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedImage {
    pub filename: Option<String>,
    pub predicted_class: String,
    pub confidence: f64,
    pub nutrition_info: NutritionRecord,
}
