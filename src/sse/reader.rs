use bytes::Bytes;
use futures_util::Stream;

use super::StreamError;
use super::frame::Frame;

/// Splits a raw response body into classified frames.
///
/// Only [`Frame::Data`] and [`Frame::Unrecognized`] are yielded: short frames
/// are dropped and a terminal sentinel ends the stream, discarding whatever
/// the body still holds. A transport error is yielded once and ends the stream.
///
/// # Arguments
///
/// * `byte_stream` - A stream of raw bytes from an HTTP response
pub fn frame_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<Frame, StreamError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(StreamError::Transport(e));
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);

            while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=line_end).collect();

                match Frame::classify(&line) {
                    Frame::Terminal => return,
                    Frame::TooShort => {}
                    frame => yield Ok(frame),
                }
            }
        }

        // unterminated tail at end of stream
        match Frame::classify(&buffer) {
            Frame::Terminal | Frame::TooShort => {}
            frame => yield Ok(frame),
        }
    }
}
