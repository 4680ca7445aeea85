//! 投稿結果の記録（`--output` のJSON）

use crate::error::WordSolverError;
use crate::intake::ImageInfo;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use wordsolver_common::{SubmissionOutcome, OCR_FAILURE_MESSAGE};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub extracted_text: Option<String>,

    #[serde(default)]
    pub generated_answer: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    /// RFC 3339（UTC）
    #[serde(default)]
    pub solved_at: String,
}

impl SubmissionRecord {
    fn new(info: &ImageInfo) -> Self {
        Self {
            file_name: info.file_name.clone(),
            file_path: info.path.display().to_string(),
            solved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            ..Default::default()
        }
    }

    /// 投稿結果から記録を作る
    ///
    /// 他の画像の抽出テキスト・回答は持ち込まない
    pub fn from_outcome(info: &ImageInfo, outcome: &SubmissionOutcome) -> Self {
        let record = Self::new(info);
        match outcome {
            SubmissionOutcome::Answered {
                extracted_text,
                answer,
            } => Self {
                extracted_text: Some(extracted_text.clone()),
                generated_answer: Some(answer.clone()).filter(|a| !a.is_empty()),
                ..record
            },
            SubmissionOutcome::RecognitionFailed => Self {
                error: Some(OCR_FAILURE_MESSAGE.to_string()),
                ..record
            },
            SubmissionOutcome::AnswerFailed { extracted_text } => Self {
                extracted_text: Some(extracted_text.clone()),
                ..record
            },
        }
    }

    /// 読み込みに失敗した画像の記録
    pub fn from_error(info: &ImageInfo, err: &WordSolverError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::new(info)
        }
    }
}
