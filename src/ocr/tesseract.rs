//! tesseract連携
//!
//! `tesseract - stdout -l <lang>` を起動し、画像バイト列を標準入力へ書き込んで
//! 標準出力を認識結果として受け取る。

use super::{OcrError, TextRecognizer};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use wordsolver_common::decode_data_url;

pub struct TesseractRecognizer {
    command: String,
}

impl TesseractRecognizer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, data_url: &str, language: &str) -> Result<String, OcrError> {
        let bytes = decode_data_url(data_url).map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        let mut child = Command::new(&self.command)
            .args(["-", "stdout", "-l", language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| OcrError::Spawn(format!("{}: {}", self.command, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // 画像を読まずに終了するケースがあるため、書き込み失敗は終了コードで判断する
            if let Err(e) = stdin.write_all(&bytes).await {
                tracing::debug!(error = %e, "failed to write image to tesseract stdin");
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "{} failed (code {:?}): {}",
                self.command,
                output.status.code(),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        tracing::debug!(chars = text.len(), "text recognized");

        Ok(text)
    }
}
