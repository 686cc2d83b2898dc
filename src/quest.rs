//! Streaming request drivers: one request, one body, consumed to the end.

use anyhow::Result;
use futures_util::StreamExt;
use std::io::Write;

use crate::client::{LlmClient, Message, TranslationSpec};
use crate::reducer::{SnapshotDiff, ThinkAnswerReducer};
use crate::sse::{Frame, decode, frame_stream};
use crate::ui::Console;

/// Sends `messages` as a chat request and renders the reply as it streams.
///
/// Reasoning spans are wrapped in think markers. Returns the accumulated
/// reply (reasoning included) for the caller to append to the conversation.
pub async fn quest<W: Write, E: Write>(
    client: &LlmClient,
    messages: &[Message],
    console: &mut Console<W, E>,
) -> Result<String> {
    let response = client.chat(messages).await?;
    let mut frames = std::pin::pin!(frame_stream(response.bytes_stream()));
    let mut reducer = ThinkAnswerReducer::new();

    while let Some(frame) = frames.next().await {
        match frame? {
            Frame::Data(payload) => {
                if let Some(delta) = decode(&payload)? {
                    for event in reducer.feed(&delta) {
                        console.emit(&event)?;
                    }
                }
            }
            Frame::Unrecognized(raw) => console.diagnostic(&raw)?,
            Frame::Terminal | Frame::TooShort => {}
        }
    }

    console.finish();
    Ok(reducer.finish())
}

/// Sends `text` as a translation request and renders the translation as it
/// streams.
///
/// Every frame carries the whole translation so far; only the newly appended
/// part is written.
pub async fn translate<W: Write, E: Write>(
    client: &LlmClient,
    spec: &TranslationSpec,
    text: &str,
    console: &mut Console<W, E>,
) -> Result<()> {
    let response = client.translate(spec, text).await?;
    let mut frames = std::pin::pin!(frame_stream(response.bytes_stream()));
    let mut diff = SnapshotDiff::new();

    while let Some(frame) = frames.next().await {
        match frame? {
            Frame::Data(payload) => {
                if let Some(delta) = decode(&payload)? {
                    console.write(diff.feed(&delta.answer))?;
                }
            }
            Frame::Unrecognized(raw) => console.diagnostic(&raw)?,
            Frame::Terminal | Frame::TooShort => {}
        }
    }

    console.finish();
    Ok(())
}
