//! Assistant operations: classification, retrieval, generation.

mod classifier;
mod generator;
mod pipeline;
mod retriever;

pub use classifier::{
    classification_request, classify_request, valid_prompt, Category, CLASSIFIER_MAX_TOKENS,
    CLASSIFIER_TEMPERATURE, CLASSIFIER_TOP_P,
};
pub use generator::{generate_response, GENERATOR_MAX_TOKENS};
pub use pipeline::{AskOutcome, Assistant};
pub use retriever::query_knowledge_base;
