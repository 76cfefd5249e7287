// Copyright 2025 The bedrock-assist Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Bedrock Assist
//!
//! Thin client over AWS Bedrock for a small knowledge-base assistant.
//!
//! Three stateless operations, each one remote call:
//!
//! - [`valid_prompt`] classifies a request into a fixed category set and
//!   tells whether it is in domain,
//! - [`query_knowledge_base`] fetches the top 3 passages from a knowledge base,
//! - [`generate_response`] sends a prompt to a hosted model and returns its text.
//!
//! The service handles are passed in explicitly through the [`ModelInvoker`]
//! and [`KnowledgeBaseRetriever`] traits; [`Assistant`] bundles them with
//! [`AppSettings`] and chains the three operations.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bedrock_assist::{AppSettings, AskOutcome, Assistant};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = AppSettings::from_env().with_knowledge_base_id("kb-123");
//!     let assistant = Assistant::connect(settings).await;
//!
//!     match assistant.ask("Quelle est la biodiversité du Vexin?").await? {
//!         AskOutcome::Answered { answer, .. } => println!("{}", answer),
//!         AskOutcome::Rejected => println!("Out of scope"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod settings;

#[cfg(test)]
mod testing;

pub use assistant::{
    classify_request, generate_response, query_knowledge_base, valid_prompt, AskOutcome,
    Assistant, Category,
};
pub use error::BedrockError;
pub use knowledge::{
    passage_text, result_to_json, source_reference, BedrockKnowledgeBaseClient,
    KnowledgeBaseRetriever, RetrievalRequest, RetrievalResult,
};
pub use model::{BedrockModelClient, ChatRequest, ChatResponse, ModelInvoker};
pub use settings::AppSettings;
