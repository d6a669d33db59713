//! Prompt construction for grounded answers

pub mod prompt;

pub use prompt::{PromptBuilder, BOOK_REFUSAL, CONTEXT_DELIMITER, SELECTION_REFUSAL};
