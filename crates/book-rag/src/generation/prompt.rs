//! Prompt templates for RAG generation

use crate::providers::vector_store::ScoredPoint;

/// Answer given when the book has nothing relevant
pub const BOOK_REFUSAL: &str =
    "I can only answer questions using the contents of The Spec-Driven AI Engineer book.";

/// Answer given when the selected text does not hold the answer
pub const SELECTION_REFUSAL: &str = "I cannot find the answer within the selected text portion.";

/// Separator between retrieved chunks in the assembled context
pub const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

/// Prompt builder for chat queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join the text of each hit, in retrieval order
    ///
    /// Hits without a `text` payload are dropped. Returns `None` when nothing
    /// usable is left.
    pub fn build_context(points: &[ScoredPoint]) -> Option<String> {
        let texts: Vec<&str> = points.iter().filter_map(ScoredPoint::text).collect();

        if texts.is_empty() {
            return None;
        }

        Some(texts.join(CONTEXT_DELIMITER))
    }

    /// System instruction grounding the answer in retrieved book passages
    pub fn rag_system_prompt(context: &str) -> String {
        format!(
            "Answer the user's question based ONLY on the provided context. \
             If the context does not contain the answer, politely state, '{refusal}'\n\n\
             Context:\n{context}",
            refusal = BOOK_REFUSAL,
            context = context
        )
    }

    /// System instruction grounding the answer in caller-selected text
    pub fn selective_system_prompt(selection: &str) -> String {
        format!(
            "Answer the user's question based ONLY on this SPECIFIC selected text: '{selection}'. \
             Do not use any other knowledge. If the answer is not in this exact text, state, \
             '{refusal}'",
            selection = selection,
            refusal = SELECTION_REFUSAL
        )
    }
}
