//! 入力画像の型定義
//!
//! CLIとテストで共有される型:
//! - UploadedImage: 取り込み済み画像（Data URL形式）

use crate::data_url::{encode_data_url, extract_mime_type_from_data_url};
use serde::{Deserialize, Serialize};

/// 取り込み済み画像
///
/// 新しい画像が選ばれるまで保持される。明示的な破棄はない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub file_name: String,

    /// 画像ファイルのパス（表示・記録用）
    #[serde(default)]
    pub file_path: String,

    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

impl UploadedImage {
    pub fn from_bytes(
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        mime_type: &str,
        bytes: &[u8],
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            data_url: encode_data_url(mime_type, bytes),
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        extract_mime_type_from_data_url(&self.data_url)
    }
}
