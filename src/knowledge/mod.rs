//! Knowledge-base retrieval module.

mod client;
mod types;

pub use client::{BedrockKnowledgeBaseClient, KnowledgeBaseRetriever};
pub use types::{
    passage_text, result_to_json, source_reference, RetrievalRequest, RetrievalResult,
    DEFAULT_NUMBER_OF_RESULTS,
};
