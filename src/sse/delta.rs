use serde::Deserialize;

use super::StreamError;

/// Content carried by one streamed frame.
///
/// For chat completions both fields are increments; translation endpoints
/// send the whole translation so far in `answer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    pub reasoning: String,
    pub answer: String,
}

impl Delta {
    pub fn reasoning(text: impl Into<String>) -> Self {
        Self {
            reasoning: text.into(),
            answer: String::new(),
        }
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            reasoning: String::new(),
            answer: text.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    // some providers send `"delta": null` on the finishing choice
    #[serde(default)]
    delta: Option<DeltaBody>,
}

#[derive(Debug, Default, Deserialize)]
struct DeltaBody {
    content: Option<String>,
    reasoning_content: Option<String>,
}

/// Decodes the JSON payload of a data frame.
///
/// Only `choices[0].delta` is consulted. Returns `Ok(None)` for frames
/// without choices (usage-only trailers), and an error when the payload is
/// not valid JSON.
pub fn decode(payload: &[u8]) -> Result<Option<Delta>, StreamError> {
    let response: StreamResponse =
        serde_json::from_slice(payload).map_err(|source| StreamError::Decode {
            payload: String::from_utf8_lossy(payload).into_owned(),
            source,
        })?;

    Ok(response.choices.into_iter().next().map(|choice| {
        let delta = choice.delta.unwrap_or_default();
        Delta {
            reasoning: delta.reasoning_content.unwrap_or_default(),
            answer: delta.content.unwrap_or_default(),
        }
    }))
}
