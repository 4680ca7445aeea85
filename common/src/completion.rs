//! Chat Completions APIのリクエスト/レスポンス型
//!
//! リクエスト本文の組み立てとレスポンスからの回答抽出のみを扱う。
//! HTTP送信はCLI側（`answer`モジュール）で行う。

use crate::error::{Error, Result};
use crate::prompts::build_answer_prompt;
use serde::{Deserialize, Serialize};

/// 送信先エンドポイント
pub const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// 固定のモデル識別子
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f64 = 0.5;
pub const TOP_P: f64 = 0.99;

/// Chat Completions APIリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat Completions APIレスポンス（使うフィールドのみ）
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// OCRテキストから回答生成リクエストを組み立てる
///
/// # Arguments
/// * `model` - モデル識別子（通常は `DEFAULT_MODEL`）
/// * `extracted_text` - OCRで抽出したテキスト
pub fn build_chat_request(model: &str, extracted_text: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: build_answer_prompt(extracted_text),
        }],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
        top_p: TOP_P,
    }
}

impl ChatResponse {
    /// `choices[0].message.content` を取り出す
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// レスポンス本文をパースして回答テキストを返す
///
/// `choices` が空、または `content` がnullの場合はエラー
pub fn parse_chat_response(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| Error::Parse("choices[0].message.content がありません".into()))
}
