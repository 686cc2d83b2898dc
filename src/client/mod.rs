//! HTTP client for OpenAI-compatible chat and translation endpoints.

mod request;
mod transport;

pub use request::{
    ChatRequest, Message, Role, TranslationRequest, TranslationSpec, conversation,
};
pub use transport::{ClientError, LlmClient};
