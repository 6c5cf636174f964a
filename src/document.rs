//! パターンライブラリのデータファイル（data.json）
//!
//! レジストリ（`groups`）と Figma 設定（`figma`）を保持する。
//! 書き込みは常にドキュメント全体を書き直す。未知のフィールドは保持する。

use crate::error::{AstrumError, Result};
use crate::fs::FileSystem;
use crate::registry::{Group, Registry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// データファイル名
pub const DATA_FILE: &str = "data.json";

/// Figma 接続設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaSettings {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub url: String,
    #[serde(
        rename = "lastFetched",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_fetched: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FigmaSettings {
    pub fn new(token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            url: url.into(),
            last_fetched: None,
            extra: Map::new(),
        }
    }

    /// トークンと URL が両方設定されているか
    pub fn is_complete(&self) -> bool {
        !self.token.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// data.json のルート構造
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDocument {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma: Option<FigmaSettings>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// レジストリの永続化先
pub trait RegistryStore {
    /// レジストリ全体を書き込む
    fn persist(&mut self, registry: &Registry) -> Result<()>;
}

impl<T: RegistryStore + ?Sized> RegistryStore for &mut T {
    fn persist(&mut self, registry: &Registry) -> Result<()> {
        (**self).persist(registry)
    }
}

/// ファイルに紐づいたデータドキュメント
pub struct DataFile<'a> {
    path: PathBuf,
    fs: &'a dyn FileSystem,
    document: DataDocument,
}

impl<'a> DataFile<'a> {
    /// データファイルを読み込む
    ///
    /// ファイルが存在しない場合は空のドキュメントとして扱う。
    /// パースできない場合は Err（処理を続行できない）。
    pub fn load(path: impl Into<PathBuf>, fs: &'a dyn FileSystem) -> Result<Self> {
        let path = path.into();

        if !fs.exists(&path) {
            tracing::debug!(path = %path.display(), "data file not found, starting empty");
            return Ok(Self {
                path,
                fs,
                document: DataDocument::default(),
            });
        }

        let content = fs.read_to_string(&path)?;
        let document: DataDocument =
            serde_json::from_str(&content).map_err(|e| AstrumError::Document {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Registry::check_unique(&document.groups).map_err(|e| AstrumError::Document {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { path, fs, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &DataDocument {
        &self.document
    }

    /// 完全な Figma 設定（未設定・不完全なら None）
    pub fn figma(&self) -> Option<&FigmaSettings> {
        self.document.figma.as_ref().filter(|s| s.is_complete())
    }

    /// Figma の token/url を更新（他のフィールドは保持）
    pub fn set_figma(&mut self, token: impl Into<String>, url: impl Into<String>) {
        match self.document.figma.as_mut() {
            Some(settings) => {
                settings.token = token.into();
                settings.url = url.into();
            }
            None => self.document.figma = Some(FigmaSettings::new(token, url)),
        }
    }

    /// 最終取得日時を記録
    pub fn mark_fetched(&mut self, at: DateTime<Utc>) {
        if let Some(settings) = self.document.figma.as_mut() {
            settings.last_fetched = Some(at);
        }
    }

    /// ドキュメントの groups からレジストリを作成
    pub fn registry(&self) -> Registry {
        Registry::new(self.document.groups.clone())
    }

    /// ドキュメント全体を書き込む
    pub fn save(&self) -> Result<()> {
        self.write_document(&self.document)
    }

    fn write_document(&self, document: &DataDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        self.fs.write(&self.path, content.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "saved data file");
        Ok(())
    }
}

impl RegistryStore for DataFile<'_> {
    /// 書き込みに成功した場合のみメモリ上の groups を更新する
    fn persist(&mut self, registry: &Registry) -> Result<()> {
        let candidate = DataDocument {
            groups: registry.groups().to_vec(),
            ..self.document.clone()
        };
        self.write_document(&candidate)?;
        self.document = candidate;
        Ok(())
    }
}
