use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// One message of a conversation, in the order it was exchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub status: String,
    pub response: String,
}

impl ChatReply {
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            response: response.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("assistant is not configured")]
    NotConfigured,

    #[error("assistant upstream answered with status {status}")]
    Upstream { status: u16 },

    #[error("assistant returned no candidate text")]
    NoCandidate,

    #[error("assistant request failed: {0}")]
    Transport(String),
}

impl AssistantError {
    /// Text shown to the user in place of a reply.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AssistantError::NotConfigured => {
                "I'm sorry, the AI assistant is not configured. Please add a Gemini API key."
            }
            AssistantError::Upstream { .. } => {
                "I'm having trouble connecting right now. Please try again."
            }
            AssistantError::NoCandidate => "I couldn't generate a response. Please try again.",
            AssistantError::Transport(_) => "Sorry, I encountered an error. Please try again.",
        }
    }
}
