//! Client for the Gemini `generateContent` API.
//!
//! Every call sends the complete conversation held by a [`ChatSession`] together
//! with a fixed generation config. The answer is the text of the first candidate.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Opens a conversation seeded with `history`.
    pub fn start_chat(&self, history: Vec<Content>) -> ChatSession<'_> {
        ChatSession {
            client: self,
            history,
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate(&self, contents: &[Content]) -> Result<Content, UpstreamError> {
        let request = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig::default(),
        };

        tracing::debug!(
            model = %self.config.model,
            turns = contents.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(UpstreamError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(UpstreamError::Decode)?;

        body.into_reply()
    }
}

/// A conversation with the model. History grows by one user turn and one model
/// turn for every successful [`ChatSession::send_message`].
pub struct ChatSession<'a> {
    client: &'a GeminiClient,
    history: Vec<Content>,
}

impl ChatSession<'_> {
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub async fn send_message(&mut self, text: &str) -> Result<String, UpstreamError> {
        self.history.push(Content::user(text));

        match self.client.generate(&self.history).await {
            Ok(reply) => {
                let answer = reply.text();
                self.history.push(reply);
                Ok(answer)
            }
            Err(err) => {
                self.history.pop();
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }

    /// Concatenation of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "text/plain",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    fn into_reply(self) -> Result<Content, UpstreamError> {
        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                    Some(reason) => UpstreamError::Blocked(reason),
                    None => UpstreamError::EmptyResponse,
                })
            }
        };

        let content = candidate.content.unwrap_or(Content {
            role: None,
            parts: Vec::new(),
        });
        if content.text().is_empty() {
            return Err(UpstreamError::EmptyResponse);
        }

        Ok(Content {
            role: Some("model".to_string()),
            parts: content.parts,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
