//! Knowledge-base lookup.

use crate::knowledge::{KnowledgeBaseRetriever, RetrievalRequest, RetrievalResult};

/// Retrieve the top passages for a query.
///
/// Service failures are logged and yield an empty list.
pub async fn query_knowledge_base(
    knowledge_base: &dyn KnowledgeBaseRetriever,
    query: &str,
    kb_id: &str,
) -> Vec<RetrievalResult> {
    let request = RetrievalRequest::new(kb_id, query);

    match knowledge_base.retrieve(&request).await {
        Ok(results) => {
            tracing::info!("Knowledge base {} returned {} results", kb_id, results.len());
            results
        }
        Err(e) => {
            tracing::error!("Error querying knowledge base: {}", e);
            Vec::new()
        }
    }
}
