use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use super::request::{ChatRequest, Message, TranslationRequest, TranslationSpec};
use crate::config::Model;

/// Failures before a response body can be streamed.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to send request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// HTTP client bound to one resolved model.
pub struct LlmClient {
    client: Client,
    model: Model,
}

impl LlmClient {
    pub fn new(model: Model) -> Self {
        Self {
            client: Client::new(),
            model,
        }
    }

    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Starts a streaming chat completion for `messages`.
    pub async fn chat(&self, messages: &[Message]) -> Result<Response, ClientError> {
        self.post(&ChatRequest::new(&self.model.name, messages))
            .await
    }

    /// Starts a streaming translation of `text`.
    pub async fn translate(
        &self,
        spec: &TranslationSpec,
        text: &str,
    ) -> Result<Response, ClientError> {
        self.post(&TranslationRequest::new(&self.model.name, spec, text))
            .await
    }

    /// POSTs `body` and returns the response once its status is known to be
    /// successful; the body itself is left unread.
    async fn post<T: Serialize + Sync>(&self, body: &T) -> Result<Response, ClientError> {
        let url = &self.model.url;

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.model.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response)
    }
}
