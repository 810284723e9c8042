use std::future::Future;

use image::RgbImage;

use crate::domain::{
    classification::{
        entities::{ClassificationResult, ClassifiedImage},
        value_objects::{ClassifierMode, ClassifyImageInput, ImageDimensions},
    },
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, fallback},
};

/// Image classifier backed by a pretrained model, or a fixed stand-in when no model
/// could be loaded.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    fn mode(&self) -> ClassifierMode;

    /// Grid the pipeline resizes images to before calling [`Classifier::predict`].
    fn input_dimensions(&self) -> ImageDimensions;

    fn predict(
        &self,
        image: RgbImage,
    ) -> impl Future<Output = Result<ClassificationResult, CoreError>> + Send;

    /// Local nutrition record for a label. Never fails.
    fn default_nutrition(&self, label: &str) -> NutritionRecord {
        fallback::default_nutrition(label)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ClassificationService: Send + Sync {
    fn classify_image(
        &self,
        input: ClassifyImageInput,
    ) -> impl Future<Output = Result<ClassifiedImage, CoreError>> + Send;
}
