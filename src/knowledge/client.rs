//! Knowledge-base client for Bedrock Agent Runtime `Retrieve`.

use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::error::DisplayErrorContext;
use aws_sdk_bedrockagentruntime::types::{
    KnowledgeBaseQuery, KnowledgeBaseRetrievalConfiguration, KnowledgeBaseVectorSearchConfiguration,
};
use aws_sdk_bedrockagentruntime::Client;

use super::types::{RetrievalRequest, RetrievalResult};
use crate::error::BedrockError;

/// Something that can run a semantic query against a hosted knowledge base.
#[async_trait]
pub trait KnowledgeBaseRetriever: Send + Sync {
    async fn retrieve(&self, request: &RetrievalRequest)
        -> Result<Vec<RetrievalResult>, BedrockError>;
}

/// Client for Bedrock knowledge bases.
#[derive(Debug, Clone)]
pub struct BedrockKnowledgeBaseClient {
    client: Client,
}

impl BedrockKnowledgeBaseClient {
    /// Create a knowledge-base client from a loaded AWS configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    /// Wrap an existing SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KnowledgeBaseRetriever for BedrockKnowledgeBaseClient {
    async fn retrieve(
        &self,
        request: &RetrievalRequest,
    ) -> Result<Vec<RetrievalResult>, BedrockError> {
        let query = KnowledgeBaseQuery::builder()
            .text(&request.query_text)
            .build();

        let configuration = KnowledgeBaseRetrievalConfiguration::builder()
            .vector_search_configuration(
                KnowledgeBaseVectorSearchConfiguration::builder()
                    .number_of_results(request.number_of_results)
                    .build(),
            )
            .build();

        tracing::info!(
            "Querying knowledge base {} for {} results",
            request.knowledge_base_id,
            request.number_of_results
        );

        let output = self
            .client
            .retrieve()
            .knowledge_base_id(&request.knowledge_base_id)
            .retrieval_query(query)
            .retrieval_configuration(configuration)
            .send()
            .await
            .map_err(|e| BedrockError::ServiceError(DisplayErrorContext(&e).to_string()))?;

        Ok(output.retrieval_results)
    }
}
