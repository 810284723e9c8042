use chrono::Utc;

use crate::domain::{
    assistant::ports::AssistantClient,
    classification::ports::Classifier,
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthReport, ports::HealthCheckService},
    nutrition::ports::FoodDataRepository,
};

impl<C, F, A> HealthCheckService for Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    async fn health(&self) -> Result<HealthReport, CoreError> {
        Ok(HealthReport {
            status: "ok".to_string(),
            classifier_mode: self.classifier.mode(),
            nutrition_source_configured: self.food_data.is_configured(),
            assistant_configured: self.assistant.is_configured(),
            checked_at: Utc::now(),
        })
    }
}
