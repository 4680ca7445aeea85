//! Chat Completions API クライアント
//!
//! APIキーは呼び出し側から注入する（環境変数はここでは読まない）。

use super::{AnswerError, AnswerGenerator};
use async_trait::async_trait;
use reqwest::Client;
use wordsolver_common::{build_chat_request, parse_chat_response, COMPLETIONS_URL, DEFAULT_MODEL};

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: COMPLETIONS_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AnswerGenerator for OpenAiClient {
    async fn generate(&self, extracted_text: &str) -> Result<String, AnswerError> {
        let body = build_chat_request(&self.model, extracted_text);

        tracing::debug!(
            model = %self.model,
            endpoint = %self.endpoint,
            prompt_chars = extracted_text.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AnswerError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AnswerError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(AnswerError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_chat_response(&text).map_err(|e| AnswerError::Parse(e.to_string()))
    }
}
