use std::sync::Arc;

use tracing::info;

use crate::domain::{
    assistant::ports::AssistantClient, classification::ports::Classifier,
    nutrition::ports::FoodDataRepository,
};

/// Application service. Every domain service trait is implemented on this struct,
/// so handlers only ever hold one value.
pub struct Service<C, F, A> {
    pub(crate) classifier: Arc<C>,
    pub(crate) food_data: Arc<F>,
    pub(crate) assistant: Arc<A>,
}

impl<C, F, A> Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    pub fn new(classifier: C, food_data: F, assistant: A) -> Self {
        Self {
            classifier: Arc::new(classifier),
            food_data: Arc::new(food_data),
            assistant: Arc::new(assistant),
        }
    }

    /// Closes the shared HTTP sessions. Called once the server stopped accepting requests.
    pub async fn shutdown(&self) {
        self.food_data.close().await;
        self.assistant.close().await;
        info!("External client sessions closed");
    }
}

impl<C, F, A> Clone for Service<C, F, A> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            food_data: Arc::clone(&self.food_data),
            assistant: Arc::clone(&self.assistant),
        }
    }
}
