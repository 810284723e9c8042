use axum::extract::State;
use nutrilens_core::domain::assistant::{
    entities::ChatReply, ports::AssistantService, value_objects::ChatInput,
};

use crate::application::http::{
    assistant::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "assistant",
    summary = "Chat with the nutrition assistant",
    description = "Sends the message and prior history to the assistant. When the assistant is unavailable the response carries a fixed explanatory text instead of an error.",
    request_body = ChatValidator,
    responses(
        (status = 200, body = ChatReply),
        (status = 422, description = "Empty or oversized message", body = ApiErrorResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatReply>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
            history: payload.history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
