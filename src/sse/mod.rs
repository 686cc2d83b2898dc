//! Server-Sent Events (SSE) decoding for OpenAI-compatible streaming responses.
//!
//! The body is split into newline-terminated frames ([`frame_stream`]), each
//! data frame's JSON payload is decoded into a [`Delta`] ([`decode`]).

mod delta;
mod frame;
mod reader;

pub use delta::{Delta, decode};
pub use frame::Frame;
pub use reader::frame_stream;

/// Failures while consuming a response body.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Failed to read response body: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode stream frame `{payload}`: {source}")]
    Decode {
        payload: String,
        #[source]
        source: serde_json::Error,
    },
}
