//! Prompt templates sent to the hosted model.

use crate::knowledge::{passage_text, RetrievalResult};

/// Category descriptions listed in the classification prompt, in order.
pub static CATEGORY_DESCRIPTIONS: [(&str, &str); 4] = [
    ("A", "biodiversité Vexin."),
    ("B", "histoire de Sannois."),
    ("C", "Autonomie Model Y ."),
    ("D", "The request is not related to Categories A, B, or C."),
];

/// Build the classification prompt for a user request.
///
/// The request is embedded verbatim between `<user_request>` tags.
pub fn build_classification_prompt(user_request: &str) -> String {
    let categories = CATEGORY_DESCRIPTIONS
        .iter()
        .map(|(letter, description)| format!("Category {}: {}", letter, description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Human: Classify the provided user request into one of the following categories. \
Evaluate the user request against each category. Once the user category has been selected \
with high confidence return the answer.\n\
{}\n\
\n\
<user_request>\n\
{}\n\
</user_request>\n\
ONLY ANSWER with the Category letter, such as the following output example:\n\
\n\
Category B\n\
\n\
Assistant:",
        categories, user_request
    )
}

/// Build the grounded answer prompt from retrieved passages.
pub fn build_answer_prompt(query: &str, passages: &[RetrievalResult]) -> String {
    let context = passages
        .iter()
        .filter_map(passage_text)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Context: {}\n\nUser: {}\n\n\
Answer the user using only the context above. \
If the context does not contain the answer, say that you do not know.",
        context, query
    )
}
