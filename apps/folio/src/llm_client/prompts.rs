//! Prompt constants and builders for the resume Q&A flow.

use crate::content::Content;

/// System prompt for all resume questions.
pub const RESUME_QA_SYSTEM: &str = "You are a helpful assistant that answers \
    questions about a person's resume. Be concise and accurate.";

/// Builds the user prompt: instructions, the full serialized resume record,
/// and the literal question.
pub fn build_ask_prompt(content: &Content, question: &str) -> String {
    let context = serde_json::to_string_pretty(content).unwrap_or_default();

    format!(
        "You are an AI assistant that answers questions about a person's resume.\n\
         Use the following resume content to answer questions accurately and concisely.\n\
         If you're not sure about something, say so. Don't make up information.\n\
         Keep your answers brief and to the point.\n\
         \n\
         Resume Content:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:"
    )
}
