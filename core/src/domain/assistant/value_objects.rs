use crate::domain::assistant::entities::ChatTurn;

pub const MAX_MESSAGE_LENGTH: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInput {
    pub message: String,
    pub history: Vec<ChatTurn>,
}
