//! In-memory stand-ins for the remote services, used by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use aws_sdk_bedrockagentruntime::types::{
    RetrievalResultContent, RetrievalResultLocation, RetrievalResultLocationType,
    RetrievalResultS3Location,
};

use crate::error::BedrockError;
use crate::knowledge::{KnowledgeBaseRetriever, RetrievalRequest, RetrievalResult};
use crate::model::{ChatRequest, ModelInvoker};

/// Replays canned model responses in order and records every request.
pub struct StubModel {
    responses: Mutex<Vec<Result<Vec<u8>, BedrockError>>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl StubModel {
    pub fn new(responses: Vec<Result<Vec<u8>, BedrockError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A model that answers once with a single text block.
    pub fn answering(text: &str) -> Self {
        Self::new(vec![Ok(text_body(text))])
    }

    pub fn failing(error: BedrockError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for StubModel {
    async fn invoke_model(&self, request: &ChatRequest) -> Result<Vec<u8>, BedrockError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(BedrockError::ServiceError("no canned response left".to_string()));
        }
        responses.remove(0)
    }
}

/// Response body with one text content block.
pub fn text_body(text: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 42, "output_tokens": 5 }
    }))
    .unwrap()
}

/// Returns a fixed result list and records every request.
pub struct StubKnowledgeBase {
    response: Result<Vec<RetrievalResult>, BedrockError>,
    pub requests: Mutex<Vec<RetrievalRequest>>,
}

impl StubKnowledgeBase {
    pub fn returning(results: Vec<RetrievalResult>) -> Self {
        Self {
            response: Ok(results),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: BedrockError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RetrievalRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeBaseRetriever for StubKnowledgeBase {
    async fn retrieve(
        &self,
        request: &RetrievalRequest,
    ) -> Result<Vec<RetrievalResult>, BedrockError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

/// An S3-backed passage with text, source and score.
pub fn passage(text: &str, uri: &str, score: f64) -> RetrievalResult {
    let location = RetrievalResultLocation::builder()
        .r#type(RetrievalResultLocationType::S3)
        .s3_location(RetrievalResultS3Location::builder().uri(uri).build())
        .build()
        .unwrap();

    RetrievalResult::builder()
        .content(RetrievalResultContent::builder().text(text).build())
        .location(location)
        .score(score)
        .build()
}
