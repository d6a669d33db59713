//! Request and response payloads

pub mod query;
pub mod response;

pub use query::{QueryRequest, SelectiveQueryRequest};
pub use response::AnswerResponse;
