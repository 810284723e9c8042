use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{
    domain::{
        assistant::{
            entities::{AssistantError, ChatRole, ChatTurn},
            ports::AssistantClient,
        },
        common::AssistantConfig,
    },
    infrastructure::http::HttpSession,
};

#[derive(Debug)]
pub struct GeminiAssistantClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    session: HttpSession,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

fn build_request(conversation: Vec<ChatTurn>) -> GeminiRequest {
    let contents = conversation
        .into_iter()
        .map(|turn| Content {
            role: match turn.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "model",
            },
            parts: vec![Part { text: turn.content }],
        })
        .collect();

    GeminiRequest {
        contents,
        generation_config: GenerationConfig::default(),
    }
}

impl GeminiAssistantClient {
    pub fn new(config: &AssistantConfig) -> Self {
        let api_key = config
            .gemini_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if api_key.is_none() {
            warn!("Gemini API key not configured, chat will answer with a fixed message");
        }

        Self {
            api_key,
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            session: HttpSession::new("gemini", config.request_timeout),
        }
    }
}

impl AssistantClient for GeminiAssistantClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_reply(&self, conversation: Vec<ChatTurn>) -> Result<String, AssistantError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AssistantError::NotConfigured)?;

        let client = self
            .session
            .client()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&build_request(conversation))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gemini API request failed");
                AssistantError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(%status, body = %error_text, "Gemini API error");
            return Err(AssistantError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            AssistantError::Transport(e.to_string())
        })?;

        body.into_text().ok_or_else(|| {
            warn!("Unexpected Gemini response format");
            AssistantError::NoCandidate
        })
    }

    async fn close(&self) {
        self.session.close().await;
    }
}
