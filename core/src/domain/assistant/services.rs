use tracing::{instrument, warn};

use crate::domain::{
    assistant::{
        entities::{AssistantError, ChatReply},
        ports::{AssistantClient, AssistantService},
        prompt::build_conversation,
        value_objects::{ChatInput, MAX_MESSAGE_LENGTH},
    },
    classification::ports::Classifier,
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::ports::FoodDataRepository,
};

impl<C, F, A> AssistantService for Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    #[instrument(skip(self, input), fields(history = input.history.len()))]
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let length = input.message.chars().count();
        if input.message.trim().is_empty() || length > MAX_MESSAGE_LENGTH {
            return Err(CoreError::InvalidInput(format!(
                "message must be between 1 and {MAX_MESSAGE_LENGTH} characters"
            )));
        }

        if !self.assistant.is_configured() {
            warn!("Assistant API key not configured");
            return Ok(ChatReply::success(
                AssistantError::NotConfigured.fallback_message(),
            ));
        }

        let reply = match self.assistant.generate_reply(build_conversation(&input)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Assistant reply replaced by fallback");
                e.fallback_message().to_string()
            }
        };

        Ok(ChatReply::success(reply))
    }
}
