//! Request classification against the fixed category set.

use std::fmt;

use crate::config::build_classification_prompt;
use crate::error::BedrockError;
use crate::model::{ChatRequest, ChatResponse, ModelInvoker};

/// Only a short label is expected back.
pub const CLASSIFIER_MAX_TOKENS: u32 = 10;
pub const CLASSIFIER_TEMPERATURE: f32 = 0.0;
pub const CLASSIFIER_TOP_P: f32 = 0.1;

/// Category answered by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// biodiversité Vexin
    A,
    /// histoire de Sannois
    B,
    /// Autonomie Model Y
    C,
    /// Not related to A, B or C
    D,
    /// Anything the model produced that is not a category label
    Unrecognized,
}

impl Category {
    /// Parse the model answer: lower-cased, trimmed, exact label match.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "category a" => Category::A,
            "category b" => Category::B,
            "category c" => Category::C,
            "category d" => Category::D,
            _ => Category::Unrecognized,
        }
    }

    /// Whether requests in this category are handled.
    pub fn is_in_domain(&self) -> bool {
        matches!(self, Category::A | Category::B | Category::C)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::A => write!(f, "Category A"),
            Category::B => write!(f, "Category B"),
            Category::C => write!(f, "Category C"),
            Category::D => write!(f, "Category D"),
            Category::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Build the classification request for a user prompt.
pub fn classification_request(prompt: &str, model_id: &str) -> ChatRequest {
    ChatRequest::single_user_message(
        model_id,
        build_classification_prompt(prompt),
        CLASSIFIER_MAX_TOKENS,
        CLASSIFIER_TEMPERATURE,
        CLASSIFIER_TOP_P,
    )
}

/// Ask the model which category a request belongs to.
pub async fn classify_request(
    model: &dyn ModelInvoker,
    prompt: &str,
    model_id: &str,
) -> Result<Category, BedrockError> {
    let request = classification_request(prompt, model_id);

    let body = model.invoke_model(&request).await?;
    tracing::debug!("LLM response body: {}", String::from_utf8_lossy(&body));

    let response = ChatResponse::from_slice(&body)?;
    tracing::debug!("LLM response JSON: {:?}", response);

    let answer = response.first_text()?;
    tracing::debug!("Extracted category: {:?}", answer);

    Ok(Category::parse(answer))
}

/// Check whether a request falls in one of the supported categories.
///
/// Never fails: any service or parsing error yields `false`.
pub async fn valid_prompt(model: &dyn ModelInvoker, prompt: &str, model_id: &str) -> bool {
    match classify_request(model, prompt, model_id).await {
        Ok(category) => {
            tracing::info!("Request classified as {}", category);
            category.is_in_domain()
        }
        Err(e) if e.is_service_error() => {
            tracing::error!("Error validating prompt (service error): {}", e);
            false
        }
        Err(e) => {
            tracing::error!("Error validating prompt (general error): {}", e);
            false
        }
    }
}
