//! Classify, retrieve and answer in one call.

use std::sync::Arc;

use super::{generate_response, query_knowledge_base, valid_prompt};
use crate::config::build_answer_prompt;
use crate::error::BedrockError;
use crate::knowledge::{BedrockKnowledgeBaseClient, KnowledgeBaseRetriever, RetrievalResult};
use crate::model::{BedrockModelClient, ModelInvoker};
use crate::settings::AppSettings;

/// Result of [`Assistant::ask`].
#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    /// The request is outside the supported categories.
    Rejected,
    /// The request was answered from the retrieved passages.
    Answered {
        answer: String,
        sources: Vec<RetrievalResult>,
    },
}

/// Holds the two service handles and the settings used by every call.
#[derive(Clone)]
pub struct Assistant {
    model: Arc<dyn ModelInvoker>,
    knowledge_base: Arc<dyn KnowledgeBaseRetriever>,
    settings: AppSettings,
}

impl Assistant {
    pub fn new(
        model: Arc<dyn ModelInvoker>,
        knowledge_base: Arc<dyn KnowledgeBaseRetriever>,
        settings: AppSettings,
    ) -> Self {
        Self {
            model,
            knowledge_base,
            settings,
        }
    }

    /// Build Bedrock clients for the configured region.
    pub async fn connect(settings: AppSettings) -> Self {
        let sdk_config = settings.load_sdk_config().await;
        tracing::info!("Bedrock clients ready for region {}", settings.region);

        Self::new(
            Arc::new(BedrockModelClient::new(&sdk_config)),
            Arc::new(BedrockKnowledgeBaseClient::new(&sdk_config)),
            settings,
        )
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// See [`valid_prompt`].
    pub async fn is_valid(&self, prompt: &str) -> bool {
        valid_prompt(self.model.as_ref(), prompt, &self.settings.model_id).await
    }

    /// See [`query_knowledge_base`].
    pub async fn retrieve(&self, query: &str) -> Vec<RetrievalResult> {
        query_knowledge_base(
            self.knowledge_base.as_ref(),
            query,
            &self.settings.knowledge_base_id,
        )
        .await
    }

    /// See [`generate_response`].
    pub async fn generate(&self, prompt: &str) -> Result<String, BedrockError> {
        generate_response(
            self.model.as_ref(),
            prompt,
            &self.settings.model_id,
            self.settings.temperature,
            self.settings.top_p,
        )
        .await
    }

    /// Answer a question from the knowledge base, refusing unsupported requests.
    pub async fn ask(&self, query: &str) -> Result<AskOutcome, BedrockError> {
        if !self.is_valid(query).await {
            tracing::info!("Rejected out-of-domain request");
            return Ok(AskOutcome::Rejected);
        }

        let sources = self.retrieve(query).await;
        if sources.is_empty() {
            tracing::warn!("No passages retrieved, answering without context");
        }

        let prompt = build_answer_prompt(query, &sources);
        let answer = self.generate(&prompt).await?;

        Ok(AskOutcome::Answered { answer, sources })
    }
}
