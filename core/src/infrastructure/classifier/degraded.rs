use image::RgbImage;

use crate::domain::{
    classification::{
        entities::ClassificationResult,
        labels::{SENTINEL_CONFIDENCE, SENTINEL_LABEL},
        ports::Classifier,
        value_objects::{ClassifierMode, ImageDimensions},
    },
    common::entities::app_errors::CoreError,
};

/// Stand-in used when no model could be loaded. Always predicts the sentinel label.
#[derive(Debug, Clone, Default)]
pub struct DegradedClassifier {
    dimensions: ImageDimensions,
}

impl DegradedClassifier {
    pub fn new(dimensions: ImageDimensions) -> Self {
        Self { dimensions }
    }
}

impl Classifier for DegradedClassifier {
    fn mode(&self) -> ClassifierMode {
        ClassifierMode::Degraded
    }

    fn input_dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    async fn predict(&self, _image: RgbImage) -> Result<ClassificationResult, CoreError> {
        Ok(ClassificationResult::new(SENTINEL_LABEL, SENTINEL_CONFIDENCE))
    }
}
