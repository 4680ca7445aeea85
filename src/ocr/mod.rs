//! OCRモジュール
//!
//! 画像（Data URL）からテキストを抽出する。
//! 本番実装はtesseractを子プロセスとして起動し、標準入力に画像を流し込む。

mod tesseract;

pub use tesseract::TesseractRecognizer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("invalid image data: {0}")]
    InvalidImage(String),

    #[error("failed to run OCR engine: {0}")]
    Spawn(String),

    #[error("OCR engine failed: {0}")]
    Engine(String),
}

/// OCRの呼び出し口
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Data URLの画像からテキストを認識する
    ///
    /// # Arguments
    /// * `data_url` - `data:<mime>;base64,...` 形式の画像
    /// * `language` - 認識言語（例: "eng"）
    async fn recognize(&self, data_url: &str, language: &str) -> Result<String, OcrError>;
}
