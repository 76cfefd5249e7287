//! Free-form text generation.

use crate::error::BedrockError;
use crate::model::{ChatRequest, ChatResponse, ModelInvoker};

pub const GENERATOR_MAX_TOKENS: u32 = 500;

/// Send a prompt to the model and return its text.
///
/// A service failure is logged and yields an empty string. A response that
/// cannot be decoded is returned as an error.
pub async fn generate_response(
    model: &dyn ModelInvoker,
    prompt: &str,
    model_id: &str,
    temperature: f32,
    top_p: f32,
) -> Result<String, BedrockError> {
    let request =
        ChatRequest::single_user_message(model_id, prompt, GENERATOR_MAX_TOKENS, temperature, top_p);

    let body = match model.invoke_model(&request).await {
        Ok(body) => body,
        Err(e) if e.is_service_error() => {
            tracing::error!("Error generating response: {}", e);
            return Ok(String::new());
        }
        Err(e) => return Err(e),
    };

    let response = ChatResponse::from_slice(&body)?;
    if let Some(usage) = &response.usage {
        tracing::debug!(
            "Generation used {} input / {} output tokens (stop_reason={:?})",
            usage.input_tokens,
            usage.output_tokens,
            response.stop_reason
        );
    }

    Ok(response.first_text()?.to_string())
}
