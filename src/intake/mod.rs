//! 画像取り込みモジュール
//!
//! ファイル選択ダイアログの代わりにパス指定（またはプロンプト入力）で画像を受け取り、
//! Data URLへ変換する。フォルダ指定時は直下の画像を名前順に列挙する。

use crate::error::{Result, WordSolverError};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wordsolver_common::UploadedImage;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff"];

impl ImageInfo {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }
}

fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// 入力パスから投稿対象の画像を集める
///
/// - ファイル: そのファイル1件（画像かどうかは読み込み時に判定）
/// - フォルダ: 直下の画像ファイル（再帰しない）
pub fn collect_images(path: &Path) -> Result<Vec<ImageInfo>> {
    if path.is_dir() {
        return scan_folder(path);
    }
    if !path.exists() {
        return Err(WordSolverError::FileNotFound(path.display().to_string()));
    }
    Ok(vec![ImageInfo::from_path(path)])
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(WordSolverError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| is_image_extension(&ext.to_string_lossy()))
        })
        .map(|e| ImageInfo::from_path(e.path()))
        .collect();

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 画像のMIMEタイプを判定
///
/// 先頭バイトから判定し、判定できなければ拡張子で判定する。
/// どちらも画像でなければNone。
pub fn detect_mime_type(bytes: &[u8], path: &Path) -> Option<&'static str> {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .ok()
        .map(|format| format.to_mime_type())
        .filter(|mime| mime.starts_with("image/"))
}

/// 画像ファイルを読み込んでData URLへ変換
pub async fn read_image(info: &ImageInfo) -> Result<UploadedImage> {
    let bytes = tokio::fs::read(&info.path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => WordSolverError::FileNotFound(info.path.display().to_string()),
        _ => WordSolverError::ImageLoad(format!("{}: {}", info.path.display(), e)),
    })?;

    let mime_type = detect_mime_type(&bytes, &info.path)
        .ok_or_else(|| WordSolverError::NotAnImage(info.path.display().to_string()))?;

    tracing::debug!(
        file = %info.file_name,
        mime = mime_type,
        bytes = bytes.len(),
        "image loaded"
    );

    Ok(UploadedImage::from_bytes(
        info.file_name.clone(),
        info.path.display().to_string(),
        mime_type,
        &bytes,
    ))
}
