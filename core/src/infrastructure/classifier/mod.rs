use image::RgbImage;
use tracing::{info, warn};

use crate::domain::{
    classification::{
        entities::ClassificationResult,
        ports::Classifier,
        value_objects::{ClassifierMode, ImageDimensions},
    },
    common::{ClassifierConfig, entities::app_errors::CoreError},
};

pub mod degraded;
pub mod onnx;

pub use degraded::DegradedClassifier;
pub use onnx::OnnxClassifier;

/// Classifier chosen once at startup.
#[derive(Clone)]
pub enum FoodClassifier {
    Model(OnnxClassifier),
    Degraded(DegradedClassifier),
}

impl FoodClassifier {
    /// Loads the model artifact, falling back to degraded mode when it is missing or
    /// cannot be loaded.
    pub fn load(config: &ClassifierConfig) -> Self {
        let path = &config.model_path;
        if !path.is_file() {
            warn!(
                model_path = %path.display(),
                "Model file not found, classifier running in degraded mode"
            );
            return Self::Degraded(DegradedClassifier::new(config.input_dimensions));
        }

        match OnnxClassifier::load(path, config.input_dimensions, config.input_layout) {
            Ok(classifier) => {
                info!(
                    model_path = %path.display(),
                    input = %config.input_dimensions,
                    layout = %config.input_layout,
                    "Classifier model loaded"
                );
                Self::Model(classifier)
            }
            Err(e) => {
                warn!(
                    model_path = %path.display(),
                    error = %e,
                    "Failed to load model, classifier running in degraded mode"
                );
                Self::Degraded(DegradedClassifier::new(config.input_dimensions))
            }
        }
    }
}

impl Classifier for FoodClassifier {
    fn mode(&self) -> ClassifierMode {
        match self {
            FoodClassifier::Model(classifier) => classifier.mode(),
            FoodClassifier::Degraded(classifier) => classifier.mode(),
        }
    }

    fn input_dimensions(&self) -> ImageDimensions {
        match self {
            FoodClassifier::Model(classifier) => classifier.input_dimensions(),
            FoodClassifier::Degraded(classifier) => classifier.input_dimensions(),
        }
    }

    async fn predict(&self, image: RgbImage) -> Result<ClassificationResult, CoreError> {
        match self {
            FoodClassifier::Model(classifier) => classifier.predict(image).await,
            FoodClassifier::Degraded(classifier) => classifier.predict(image).await,
        }
    }
}
