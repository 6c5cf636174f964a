//! パターンライブラリのワークスペース
//!
//! ルートの決定順:
//! 1. 環境変数 `ASTRUM_PATH`
//! 2. カレントディレクトリの `astrum-config.json` の `path`
//! 3. `./pattern-library`

use crate::document::DATA_FILE;
use crate::env::{self, EnvVar};
use crate::error::{AstrumError, Result};
use crate::fs::FileSystem;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// プロジェクト設定ファイル名
pub const CONFIG_FILE: &str = "astrum-config.json";

/// 設定がない場合のルート
pub const DEFAULT_PATH: &str = "pattern-library";

/// コンポーネントディレクトリ名
pub const COMPONENTS_DIR: &str = "components";

/// astrum-config.json
#[derive(Debug, Deserialize)]
struct ProjectConfig {
    #[serde(default)]
    path: Option<String>,
}

/// パターンライブラリのワークスペース
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// カレントディレクトリからワークスペースを決定
    pub fn discover(cwd: &Path, fs: &dyn FileSystem) -> Result<Self> {
        Self::discover_with(cwd, fs, EnvVar::get(env::ASTRUM_PATH))
    }

    /// 環境変数の値を明示してワークスペースを決定
    pub fn discover_with(
        cwd: &Path,
        fs: &dyn FileSystem,
        env_override: Option<String>,
    ) -> Result<Self> {
        if let Some(path) = env_override {
            return Ok(Self::new(cwd.join(path)));
        }

        let config_path = cwd.join(CONFIG_FILE);
        if fs.exists(&config_path) {
            let content = fs.read_to_string(&config_path)?;
            let config: ProjectConfig =
                serde_json::from_str(&content).map_err(|e| AstrumError::Document {
                    path: config_path.clone(),
                    message: e.to_string(),
                })?;

            if let Some(path) = config.path.filter(|p| !p.trim().is_empty()) {
                return Ok(Self::new(cwd.join(path.trim())));
            }
        }

        Ok(Self::new(cwd.join(DEFAULT_PATH)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// data.json のパス
    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    /// components ディレクトリのパス
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }
}
