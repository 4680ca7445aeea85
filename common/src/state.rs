//! 画面状態（UiState）と状態遷移
//!
//! 1回の投稿の流れ:
//! 1. image_loaded      … 画像を保持、エラーをクリア、loading = true
//! 2. text_recognized   … OCR成功、抽出テキストを上書き
//!    recognition_failed … OCR失敗、エラー表示、loading = false（ここで終了）
//! 3. answer_generated  … 回答を保持、loading = false
//!    answer_failed     … 回答をクリア、loading = false（エラー表示はしない）
//!
//! OCR失敗は画面にエラーを出すが、回答生成の失敗は出さない。

use crate::types::UploadedImage;
use serde::{Deserialize, Serialize};

/// OCR失敗時に表示するメッセージ
pub const OCR_FAILURE_MESSAGE: &str = "unable to extract text from the uploaded image.";

/// 画面状態
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
    pub image_src: Option<String>,
    pub extracted_text: Option<String>,
    pub generated_answer: Option<String>,
}

/// 1回の投稿の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// OCR・回答生成ともに成功
    Answered { extracted_text: String, answer: String },
    /// OCR失敗（回答生成は行わない）
    RecognitionFailed,
    /// OCRは成功したが回答生成に失敗
    AnswerFailed { extracted_text: String },
}

/// 描画内容
///
/// エラーバナーと回答パネルは同時に表示されない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View<'a> {
    pub image_src: Option<&'a str>,
    pub spinner: bool,
    pub error_banner: Option<&'a str>,
    pub answer_panel: Option<&'a str>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像の読み込み完了
    ///
    /// 前回の抽出テキスト・回答は次の結果で上書きされるまで残る
    pub fn image_loaded(&mut self, image: &UploadedImage) {
        self.image_src = Some(image.data_url.clone());
        self.error = None;
        self.loading = true;
    }

    /// OCR成功
    pub fn text_recognized(&mut self, text: &str) {
        self.extracted_text = Some(text.to_string());
    }

    /// OCR失敗
    pub fn recognition_failed(&mut self) {
        self.error = Some(OCR_FAILURE_MESSAGE.to_string());
        self.loading = false;
    }

    /// 回答生成成功
    pub fn answer_generated(&mut self, answer: &str) {
        self.generated_answer = Some(answer.to_string());
        self.loading = false;
    }

    /// 回答生成失敗
    pub fn answer_failed(&mut self) {
        self.generated_answer = None;
        self.loading = false;
    }

    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    pub fn view(&self) -> View<'_> {
        let error_banner = self.error.as_deref().filter(|e| !e.is_empty());
        let answer_panel = if error_banner.is_some() {
            None
        } else {
            self.generated_answer.as_deref().filter(|a| !a.is_empty())
        };

        View {
            image_src: self.image_src.as_deref(),
            spinner: self.loading,
            error_banner,
            answer_panel,
        }
    }
}
