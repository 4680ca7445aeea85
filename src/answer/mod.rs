//! 回答生成モジュール
//!
//! OCRテキストをChat Completions APIへ送り、回答テキストを得る。

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Parse(String),
}

/// 回答生成の呼び出し口
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, extracted_text: &str) -> Result<String, AnswerError>;
}
