use std::path::PathBuf;
use thiserror::Error;

/// astrum-figma 統一エラー型
#[derive(Debug, Error)]
pub enum AstrumError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Figma API error: {message} (status: {status})")]
    FigmaApi { status: u16, message: String },

    #[error("Invalid Figma file URL: {0}. Expected 'https://www.figma.com/file/<key>/...'")]
    InvalidFileUrl(String),

    #[error("No Figma settings found")]
    SettingsMissing,

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Group already exists: {0}")]
    DuplicateGroup(String),

    #[error("Component already exists: {group}/{component}")]
    DuplicateComponent { group: String, component: String },

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Refusing to write outside the components directory: {}", .0.display())]
    UnsafePath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {}: {message}", path.display())]
    Document { path: PathBuf, message: String },

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, AstrumError>;

impl AstrumError {
    /// ネットワーク起因のエラーかどうか
    ///
    /// fetch ではこれらを「0 件」として扱い、処理を継続する。
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AstrumError::Network(_) | AstrumError::FigmaApi { .. } | AstrumError::Json(_)
        )
    }
}
