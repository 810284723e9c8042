use std::future::Future;

use crate::domain::{
    assistant::{
        entities::{AssistantError, ChatReply, ChatTurn},
        value_objects::ChatInput,
    },
    common::entities::app_errors::CoreError,
};

/// Generative model used for the nutrition chat.
#[cfg_attr(test, mockall::automock)]
pub trait AssistantClient: Send + Sync {
    fn is_configured(&self) -> bool;

    fn generate_reply(
        &self,
        conversation: Vec<ChatTurn>,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;

    fn close(&self) -> impl Future<Output = ()> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    /// Upstream failures are answered with a fixed fallback text, never an error.
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}
