//! Model client for Bedrock Runtime `InvokeModel`.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;

use super::types::ChatRequest;
use crate::error::BedrockError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Something that can run a chat request against a hosted model.
///
/// Returns the raw response body; decoding is left to the caller so that each
/// operation decides how to treat a malformed payload.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(&self, request: &ChatRequest) -> Result<Vec<u8>, BedrockError>;
}

/// Client for Anthropic models served by Bedrock Runtime.
#[derive(Debug, Clone)]
pub struct BedrockModelClient {
    client: Client,
}

impl BedrockModelClient {
    /// Create a model client from a loaded AWS configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    /// Wrap an existing SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelInvoker for BedrockModelClient {
    async fn invoke_model(&self, request: &ChatRequest) -> Result<Vec<u8>, BedrockError> {
        let body = request.to_body()?;

        tracing::info!(
            "Invoking model {} (max_tokens={}, temperature={}, top_p={})",
            request.model_id,
            request.max_tokens,
            request.temperature,
            request.top_p
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| BedrockError::ServiceError(DisplayErrorContext(&e).to_string()))?;

        Ok(output.body.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChatResponse;
    use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
    use aws_sdk_bedrockruntime::Config;
    use aws_smithy_http_client::test_util::{capture_request, CaptureRequestReceiver};
    use aws_smithy_types::body::SdkBody;

    fn client_replying(status: u16, body: Vec<u8>) -> (BedrockModelClient, CaptureRequestReceiver) {
        let response = http::Response::builder()
            .status(status)
            .header("content-type", JSON_CONTENT_TYPE)
            .body(SdkBody::from(body))
            .unwrap();
        let (http_client, captured) = capture_request(Some(response));

        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-west-2"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .http_client(http_client)
            .build();

        (BedrockModelClient::from_client(Client::from_conf(config)), captured)
    }

    fn request() -> ChatRequest {
        ChatRequest::single_user_message("model-x", "histoire de Sannois", 10, 0.0, 0.1)
    }

    #[tokio::test]
    async fn test_invoke_model_sends_json_body_without_model_id() {
        let (client, captured) = client_replying(200, crate::testing::text_body("Category B"));

        client.invoke_model(&request()).await.unwrap();

        let sent = captured.expect_request();
        assert_eq!(sent.method(), "POST");
        assert!(sent.uri().contains("/model/model-x/invoke"));
        assert_eq!(sent.headers().get("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(sent.headers().get("accept"), Some(JSON_CONTENT_TYPE));

        let body: serde_json::Value = serde_json::from_slice(sent.body().bytes().unwrap()).unwrap();
        assert!(body.get("model_id").is_none());
        assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(body["max_tokens"], 10);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"][0]["text"], "histoire de Sannois");
    }

    #[tokio::test]
    async fn test_invoke_model_returns_raw_body() {
        let canned = crate::testing::text_body("Category B");
        let (client, _captured) = client_replying(200, canned.clone());

        let body = client.invoke_model(&request()).await.unwrap();
        assert_eq!(body, canned);
        assert_eq!(ChatResponse::from_slice(&body).unwrap().first_text().unwrap(), "Category B");
    }

    #[tokio::test]
    async fn test_invoke_model_service_error() {
        let (client, _captured) = client_replying(
            400,
            br#"{"message":"Malformed input request"}"#.to_vec(),
        );

        let result = client.invoke_model(&request()).await;
        assert!(matches!(result, Err(BedrockError::ServiceError(_))));
    }
}
