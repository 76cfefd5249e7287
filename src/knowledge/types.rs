//! Retrieval request and result records.

use aws_smithy_types::{Document, Number};
use serde_json::{json, Map, Value};

/// Number of passages requested from the knowledge base on every query.
pub const DEFAULT_NUMBER_OF_RESULTS: i32 = 3;

/// One retrieved passage, exactly as the service returned it.
pub use aws_sdk_bedrockagentruntime::types::KnowledgeBaseRetrievalResult as RetrievalResult;

/// A knowledge-base query.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalRequest {
    pub knowledge_base_id: String,
    pub query_text: String,
    pub number_of_results: i32,
}

impl RetrievalRequest {
    /// Build a query for the default number of results.
    pub fn new(knowledge_base_id: impl Into<String>, query_text: impl Into<String>) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            query_text: query_text.into(),
            number_of_results: DEFAULT_NUMBER_OF_RESULTS,
        }
    }
}

/// Text of a retrieved passage, if it has any.
pub fn passage_text(result: &RetrievalResult) -> Option<&str> {
    result
        .content
        .as_ref()
        .map(|content| content.text.as_str())
        .filter(|text| !text.is_empty())
}

/// Where a passage came from: URI, URL, document id or SQL query,
/// whichever the data source provides.
pub fn source_reference(result: &RetrievalResult) -> Option<&str> {
    let location = result.location.as_ref()?;

    location
        .s3_location
        .as_ref()
        .and_then(|l| l.uri.as_deref())
        .or_else(|| location.web_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.confluence_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.salesforce_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.share_point_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.one_drive_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.google_drive_location.as_ref().and_then(|l| l.url.as_deref()))
        .or_else(|| location.kendra_document_location.as_ref().and_then(|l| l.uri.as_deref()))
        .or_else(|| location.custom_document_location.as_ref().and_then(|l| l.id.as_deref()))
        .or_else(|| location.sql_location.as_ref().and_then(|l| l.query.as_deref()))
}

/// Render a record as JSON using the service's field names.
///
/// The SDK redacts records in `Debug` output, so this is what the CLI prints.
pub fn result_to_json(result: &RetrievalResult) -> Value {
    let content = result.content.as_ref().map(|c| {
        json!({
            "type": c.r#type.as_ref().map(|t| t.as_str()),
            "text": c.text,
            "byteContent": c.byte_content,
            "row": c.row.as_ref().map(|columns| {
                columns
                    .iter()
                    .map(|col| {
                        json!({
                            "columnName": col.column_name,
                            "columnValue": col.column_value,
                            "type": col.r#type.as_ref().map(|t| t.as_str()),
                        })
                    })
                    .collect::<Vec<_>>()
            }),
            "video": c.video.as_ref().map(|v| json!({ "s3Uri": v.s3_uri, "summary": v.summary })),
            "audio": c.audio.as_ref().map(|a| {
                json!({ "s3Uri": a.s3_uri, "transcription": a.transcription })
            }),
        })
    });

    json!({
        "content": content,
        "location": result.location.as_ref().map(|l| {
            json!({ "type": l.r#type.as_str(), "reference": source_reference(result) })
        }),
        "score": result.score,
        "metadata": result.metadata.as_ref().map(|m| {
            m.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect::<Map<String, Value>>()
        }),
        "documentId": result.document_id,
    })
}

fn document_to_json(document: &Document) -> Value {
    match document {
        Document::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect::<Map<String, Value>>(),
        ),
        Document::Array(items) => Value::Array(items.iter().map(document_to_json).collect()),
        Document::Number(Number::PosInt(n)) => Value::from(*n),
        Document::Number(Number::NegInt(n)) => Value::from(*n),
        Document::Number(Number::Float(f)) => Value::from(*f),
        Document::String(s) => Value::String(s.clone()),
        Document::Bool(b) => Value::Bool(*b),
        Document::Null => Value::Null,
    }
}
