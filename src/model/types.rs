//! Request and response bodies for Anthropic models on Bedrock.

use serde::{Deserialize, Serialize};

use crate::error::BedrockError;

/// Messages API version expected by Anthropic models hosted on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// A single chat-completion request.
///
/// `model_id` is sent alongside the body, not inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    #[serde(skip)]
    pub model_id: String,
    pub anthropic_version: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl ChatRequest {
    /// Build a request holding one user message with the given text.
    pub fn single_user_message(
        model_id: impl Into<String>,
        text: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
        top_p: f32,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            messages: vec![ChatMessage::user(text)],
            max_tokens,
            temperature,
            top_p,
        }
    }

    /// Serialize the JSON body sent to `InvokeModel`.
    pub fn to_body(&self) -> Result<Vec<u8>, BedrockError> {
        serde_json::to_vec(self).map_err(|e| BedrockError::InvalidRequest(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

impl ChatMessage {
    /// Create a user message with a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Response body returned by `InvokeModel`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub content: Vec<ResponseBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl ChatResponse {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, BedrockError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> Result<&str, BedrockError> {
        let block = self
            .content
            .first()
            .ok_or_else(|| BedrockError::ParseError("No content blocks in response".to_string()))?;

        block
            .text
            .as_deref()
            .ok_or_else(|| BedrockError::ParseError("First content block has no text".to_string()))
    }
}
