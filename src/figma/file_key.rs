//! Figma ファイル URL からファイルキーを取り出す

use crate::error::{AstrumError, Result};

/// ホスト部分として受け付けるプレフィックス
const HOST_PREFIXES: &[&str] = &[
    "https://www.figma.com/",
    "https://figma.com/",
    "http://www.figma.com/",
    "http://figma.com/",
    "www.figma.com/",
    "figma.com/",
];

/// ファイル種別のパス
const KIND_PREFIXES: &[&str] = &["file/", "design/"];

/// ファイル URL（またはキーそのもの）からファイルキーを取得
///
/// `https://www.figma.com/file/<key>/<title>?node-id=...` → `<key>`
pub fn file_key(url: &str) -> Result<String> {
    let trimmed = url.trim();
    let invalid = || AstrumError::InvalidFileUrl(trimmed.to_string());

    let rest = match HOST_PREFIXES.iter().find_map(|p| trimmed.strip_prefix(p)) {
        Some(path) => KIND_PREFIXES
            .iter()
            .find_map(|k| path.strip_prefix(k))
            .ok_or_else(invalid)?,
        None if trimmed.contains("://") => return Err(invalid()),
        None => trimmed,
    };

    let key = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    Ok(key.to_string())
}
