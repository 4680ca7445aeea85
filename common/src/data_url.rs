//! Data URL変換
//!
//! 画像バイト列 ⇔ `data:image/png;base64,iVBORw0...` 形式の相互変換

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const BASE64_MARKER: &str = ";base64,";

/// バイト列をData URLへエンコード
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{}{}{}", mime_type, BASE64_MARKER, STANDARD.encode(bytes))
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let idx = rest.find(BASE64_MARKER)?;
    Some(&rest[idx + BASE64_MARKER.len()..])
}

/// Data URLからMIMEタイプを抽出
///
/// `data:` で始まらない場合やMIMEが空の場合はNone
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let mime = rest.split([';', ',']).next()?;
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Data URLを元のバイト列へデコード
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = extract_base64_from_data_url(data_url).ok_or_else(|| {
        let preview: String = data_url.chars().take(32).collect();
        Error::InvalidDataUrl(format!("not a base64 data URL: {}", preview))
    })?;
    Ok(STANDARD.decode(payload)?)
}
