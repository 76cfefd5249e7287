//! Configuration module: prompt templates.

mod prompts;

pub use prompts::{build_answer_prompt, build_classification_prompt, CATEGORY_DESCRIPTIONS};
