use tracing::{error, info, instrument, warn};

use crate::domain::{
    assistant::ports::AssistantClient,
    classification::{
        entities::ClassifiedImage,
        ports::{ClassificationService, Classifier},
        preprocessing::{ensure_image_content_type, preprocess_upload},
        value_objects::ClassifyImageInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{
        entities::NutritionSource,
        ports::{FoodDataRepository, NutritionService},
    },
};

impl<C, F, A> ClassificationService for Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    #[instrument(skip(self, input), fields(filename = ?input.filename, size = input.image_data.len()))]
    async fn classify_image(&self, input: ClassifyImageInput) -> Result<ClassifiedImage, CoreError> {
        let ClassifyImageInput {
            filename,
            content_type,
            image_data,
        } = input;

        ensure_image_content_type(content_type.as_deref()).inspect_err(|e| {
            warn!(stage = "validate", content_type = ?content_type, error = %e, "Rejected upload");
        })?;

        let prepared = preprocess_upload(image_data, self.classifier.input_dimensions())
            .await
            .inspect_err(|e| {
                warn!(stage = "decode", error = %e, "Could not decode upload");
            })?;

        let prediction = self.classifier.predict(prepared).await.map_err(|e| {
            error!(stage = "inference", error = %e, "Classification failed");
            match e {
                CoreError::InferenceError(_) => e,
                other => CoreError::InferenceError(other.to_string()),
            }
        })?;

        info!(
            stage = "inference",
            label = %prediction.label,
            confidence = prediction.confidence,
            "Image classified"
        );

        let nutrition_info = match self.lookup_by_label(prediction.label.clone()).await {
            Some(record) => record,
            None => {
                info!(stage = "enrich", label = %prediction.label, "Using fallback nutrition");
                self.classifier
                    .default_nutrition(&prediction.label)
                    .with_source(NutritionSource::Fallback)
            }
        };

        Ok(ClassifiedImage {
            filename,
            predicted_class: prediction.label,
            confidence: prediction.confidence,
            nutrition_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use serde_json::json;

    use super::*;
    use crate::domain::{
        assistant::ports::MockAssistantClient,
        classification::{
            entities::ClassificationResult,
            labels::{SENTINEL_CONFIDENCE, SENTINEL_LABEL},
            ports::MockClassifier,
            value_objects::ImageDimensions,
        },
        nutrition::{
            entities::{FoodSearchHit, PartialNutrients, SERVING_BASIS},
            fallback::default_nutrition,
            ports::MockFoodDataRepository,
        },
    };

    fn png_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(32, 24, Rgb([250, 10, 10]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    fn upload(content_type: &str, image_data: Vec<u8>) -> ClassifyImageInput {
        ClassifyImageInput {
            filename: Some("lunch.png".to_string()),
            content_type: Some(content_type.to_string()),
            image_data,
        }
    }

    fn classifier_predicting(label: &'static str, confidence: f64) -> MockClassifier {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_input_dimensions()
            .return_const(ImageDimensions::default());
        classifier
            .expect_predict()
            .withf(|image| image.dimensions() == (150, 150))
            .returning(move |_| {
                Box::pin(async move { Ok(ClassificationResult::new(label, confidence)) })
            });
        classifier
            .expect_default_nutrition()
            .returning(|label| default_nutrition(label));
        classifier
    }

    fn unavailable_source() -> MockFoodDataRepository {
        let mut food_data = MockFoodDataRepository::new();
        food_data.expect_is_configured().return_const(false);
        food_data.expect_search_foods().never();
        food_data
    }

    #[tokio::test]
    async fn test_sentinel_prediction_without_source_uses_static_table() {
        let service = Service::new(
            classifier_predicting(SENTINEL_LABEL, SENTINEL_CONFIDENCE),
            unavailable_source(),
            MockAssistantClient::new(),
        );

        let result = service
            .classify_image(upload("image/png", png_bytes()))
            .await
            .unwrap();

        assert_eq!(result.filename.as_deref(), Some("lunch.png"));
        assert_eq!(result.predicted_class, "apple");
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.nutrition_info.source, NutritionSource::Fallback);
        assert_eq!(result.nutrition_info.calories, 52.0);
    }

    #[tokio::test]
    async fn test_label_outside_table_gets_generic_record() {
        let service = Service::new(
            classifier_predicting("kiwi", 0.81),
            unavailable_source(),
            MockAssistantClient::new(),
        );

        let result = service
            .classify_image(upload("image/png", png_bytes()))
            .await
            .unwrap();

        let nutrition = result.nutrition_info;
        assert_eq!(nutrition.name, "kiwi");
        assert_eq!(
            (nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat),
            (100.0, 2.0, 20.0, 0.5)
        );
        assert_eq!(nutrition.source, NutritionSource::Fallback);
    }

    #[tokio::test]
    async fn test_external_record_is_preferred() {
        let mut food_data = MockFoodDataRepository::new();
        food_data.expect_is_configured().return_const(true);
        food_data.expect_search_foods().returning(|_, _| {
            Box::pin(async {
                Ok(vec![FoodSearchHit {
                    fdc_id: Some(1102702),
                    description: Some("Bananas, raw".to_string()),
                    data_type: Some("SR Legacy".to_string()),
                    nutrients: PartialNutrients::default(),
                    serving_size: SERVING_BASIS.to_string(),
                }])
            })
        });
        food_data.expect_get_food_details().returning(|_| {
            Box::pin(async {
                Ok(json!({
                    "fdcId": 1102702,
                    "description": "Bananas, raw",
                    "foodNutrients": [
                        { "number": "208", "amount": 89.0 },
                        { "number": "203", "amount": 1.09 }
                    ]
                }))
            })
        });

        let service = Service::new(
            classifier_predicting("banana", 0.9),
            food_data,
            MockAssistantClient::new(),
        );

        let result = service
            .classify_image(upload("image/jpeg", png_bytes()))
            .await
            .unwrap();

        assert_eq!(result.nutrition_info.source, NutritionSource::External);
        assert_eq!(result.nutrition_info.protein, 1.1);
    }

    #[tokio::test]
    async fn test_non_image_upload_is_rejected_before_inference() {
        let mut classifier = MockClassifier::new();
        classifier.expect_predict().never();

        let service = Service::new(classifier, unavailable_source(), MockAssistantClient::new());
        let result = service
            .classify_image(upload("text/plain", b"hello".to_vec()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput(
                "Invalid file type. Please upload an image.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_undecodable_image_is_invalid_input() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_input_dimensions()
            .return_const(ImageDimensions::default());
        classifier.expect_predict().never();

        let service = Service::new(classifier, unavailable_source(), MockAssistantClient::new());
        let result = service
            .classify_image(upload("image/png", b"not really a png".to_vec()))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_inference_failure_is_fatal() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_input_dimensions()
            .return_const(ImageDimensions::default());
        classifier.expect_predict().returning(|_| {
            Box::pin(async { Err(CoreError::InternalServerError) })
        });

        let service = Service::new(classifier, unavailable_source(), MockAssistantClient::new());
        let result = service
            .classify_image(upload("image/png", png_bytes()))
            .await;

        assert!(matches!(result, Err(CoreError::InferenceError(_))));
    }
}
