use nutrilens_core::domain::assistant::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 4000, message = "message must be 1 to 4000 characters"))]
    pub message: String,

    /// Previous turns, oldest first.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}
