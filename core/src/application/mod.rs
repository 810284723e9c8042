use anyhow::ensure;
use tracing::info;

use crate::{
    domain::{
        classification::ports::Classifier,
        common::{NutriLensConfig, services::Service},
    },
    infrastructure::{
        classifier::FoodClassifier, llm::GeminiAssistantClient, usda::UsdaFoodDataClient,
    },
};

pub type NutriLensService = Service<FoodClassifier, UsdaFoodDataClient, GeminiAssistantClient>;

/// Builds the production service. Missing model artifacts or credentials never fail
/// startup; the affected component runs in its degraded mode instead.
pub fn create_service(config: NutriLensConfig) -> Result<NutriLensService, anyhow::Error> {
    let dimensions = config.classifier.input_dimensions;
    ensure!(
        dimensions.width > 0 && dimensions.height > 0,
        "image dimensions must be positive, got {dimensions}"
    );

    let classifier = FoodClassifier::load(&config.classifier);
    let food_data = UsdaFoodDataClient::new(&config.nutrition);
    let assistant = GeminiAssistantClient::new(&config.assistant);

    info!(classifier_mode = ?classifier.mode(), "NutriLens service ready");

    Ok(Service::new(classifier, food_data, assistant))
}
