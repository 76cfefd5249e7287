//! Model client module for hosted chat completions.

mod client;
mod types;

pub use client::{BedrockModelClient, ModelInvoker};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ContentBlock, ResponseBlock, Usage, ANTHROPIC_VERSION,
};
