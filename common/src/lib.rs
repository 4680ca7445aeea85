//! Wordsolver Common Library
//!
//! CLIとテストで共有される型・状態遷移・リクエスト組み立て

pub mod completion;
pub mod data_url;
pub mod error;
pub mod prompts;
pub mod state;
pub mod types;

pub use completion::{
    build_chat_request, parse_chat_response, ChatMessage, ChatRequest, ChatResponse,
    COMPLETIONS_URL, DEFAULT_MODEL,
};
pub use data_url::{decode_data_url, encode_data_url};
pub use error::{Error, Result};
pub use prompts::{build_answer_prompt, ANSWER_INSTRUCTION, OCR_LANGUAGE};
pub use state::{SubmissionOutcome, UiState, View, OCR_FAILURE_MESSAGE};
pub use types::UploadedImage;
