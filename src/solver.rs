//! 投稿処理のオーケストレーション
//!
//! 画像読み込み → OCR → 回答生成 を順番に待ち合わせ、各段階で `UiState` を遷移させる。
//! 状態が変わるたびに `on_change` を呼ぶ（描画・テスト用）。

use crate::answer::AnswerGenerator;
use crate::error::Result;
use crate::intake::{self, ImageInfo};
use crate::ocr::TextRecognizer;
use crate::record::SubmissionRecord;
use wordsolver_common::{SubmissionOutcome, UiState, UploadedImage, OCR_LANGUAGE};

pub struct ImageSolver<R, A> {
    recognizer: R,
    generator: A,
    language: String,
    state: UiState,
}

impl<R: TextRecognizer, A: AnswerGenerator> ImageSolver<R, A> {
    pub fn new(recognizer: R, generator: A) -> Self {
        Self {
            recognizer,
            generator,
            language: OCR_LANGUAGE.to_string(),
            state: UiState::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// ファイルを読み込んで投稿する
    ///
    /// 未選択（None）の場合は何もしない。読み込みに失敗した場合は状態を変えずにエラーを返す。
    pub async fn upload(
        &mut self,
        selection: Option<&ImageInfo>,
        on_change: impl FnMut(&UiState),
    ) -> Result<Option<SubmissionOutcome>> {
        let Some(info) = selection else {
            return Ok(None);
        };

        let image = intake::read_image(info).await?;
        Ok(self.submit(Some(image), on_change).await)
    }

    /// 複数の画像を順番に投稿する
    ///
    /// 1件の失敗（読み込み・OCR・回答生成）はその画像だけで終わり、残りは続行する
    pub async fn solve_all(
        &mut self,
        images: &[ImageInfo],
        mut on_change: impl FnMut(&UiState),
    ) -> Vec<SubmissionRecord> {
        let mut records = Vec::with_capacity(images.len());

        for info in images {
            tracing::info!(file = %info.file_name, "solving");
            let record = match self.upload(Some(info), &mut on_change).await {
                Ok(Some(outcome)) => SubmissionRecord::from_outcome(info, &outcome),
                Ok(None) => continue,
                Err(e) => {
                    tracing::error!(file = %info.file_name, error = %e, "failed to read image");
                    SubmissionRecord::from_error(info, &e)
                }
            };
            records.push(record);
        }

        records
    }

    /// 読み込み済みの画像を投稿する
    pub async fn submit(
        &mut self,
        image: Option<UploadedImage>,
        mut on_change: impl FnMut(&UiState),
    ) -> Option<SubmissionOutcome> {
        let image = image?;

        self.state.image_loaded(&image);
        on_change(&self.state);

        let extracted_text = match self.recognizer.recognize(&image.data_url, &self.language).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(file = %image.file_name, error = %e, "text recognition failed");
                self.state.recognition_failed();
                on_change(&self.state);
                return Some(SubmissionOutcome::RecognitionFailed);
            }
        };

        self.state.text_recognized(&extracted_text);
        on_change(&self.state);

        match self.generator.generate(&extracted_text).await {
            Ok(answer) => {
                self.state.answer_generated(&answer);
                on_change(&self.state);
                Some(SubmissionOutcome::Answered {
                    extracted_text,
                    answer,
                })
            }
            Err(e) => {
                // 画面にはエラーを出さない
                tracing::error!(file = %image.file_name, error = %e, "error making request to completion API");
                self.state.answer_failed();
                on_change(&self.state);
                Some(SubmissionOutcome::AnswerFailed { extracted_text })
            }
        }
    }
}
