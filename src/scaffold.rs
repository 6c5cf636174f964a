//! パターンライブラリのスキャフォールド作成
//!
//! グループ/コンポーネントに対応するディレクトリとプレースホルダーファイルを作成する。
//!
//! ```text
//! <root>/components/<group>/description.md
//! <root>/components/<group>/<component>/markup.html
//! <root>/components/<group>/<component>/description.md
//! ```
//!
//! 既存のファイルは上書きしないため、何度呼び出しても結果は変わらない。

use crate::error::{AstrumError, Result};
use crate::fs::FileSystem;
use crate::naming::check_slug;
use std::path::{Component as PathComponent, Path, PathBuf};

/// 説明用プレースホルダーのファイル名
pub const DESCRIPTION_FILE: &str = "description.md";

/// マークアップ用プレースホルダーのファイル名
pub const MARKUP_FILE: &str = "markup.html";

/// スキャフォールド作成結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// 今回新たに作成したパス
    pub created: Vec<PathBuf>,
}

impl ScaffoldOutcome {
    /// 何も作成しなかったか
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }

    fn merge(&mut self, other: ScaffoldOutcome) {
        self.created.extend(other.created);
    }
}

/// スキャフォールド作成
pub struct ScaffoldBuilder<'a> {
    /// `<root>/components`
    components_dir: PathBuf,
    fs: &'a dyn FileSystem,
}

impl<'a> ScaffoldBuilder<'a> {
    /// コンポーネントディレクトリを指定して作成
    pub fn new(components_dir: impl Into<PathBuf>, fs: &'a dyn FileSystem) -> Self {
        Self {
            components_dir: components_dir.into(),
            fs,
        }
    }

    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    /// グループディレクトリのパス
    pub fn group_dir(&self, group_slug: &str) -> Result<PathBuf> {
        self.confined(&[group_slug])
    }

    /// コンポーネントディレクトリのパス
    pub fn component_dir(&self, group_slug: &str, component_slug: &str) -> Result<PathBuf> {
        self.confined(&[group_slug, component_slug])
    }

    /// グループのディレクトリと description.md を用意
    pub fn ensure_group_scaffold(&self, group_slug: &str) -> Result<ScaffoldOutcome> {
        let dir = self.group_dir(group_slug)?;
        let mut outcome = self.ensure_dir(&dir)?;
        outcome.merge(self.ensure_file(&dir.join(DESCRIPTION_FILE))?);
        Ok(outcome)
    }

    /// コンポーネントのディレクトリと markup.html / description.md を用意
    pub fn ensure_component_scaffold(
        &self,
        group_slug: &str,
        component_slug: &str,
    ) -> Result<ScaffoldOutcome> {
        let dir = self.component_dir(group_slug, component_slug)?;
        let mut outcome = self.ensure_dir(&dir)?;
        outcome.merge(self.ensure_file(&dir.join(MARKUP_FILE))?);
        outcome.merge(self.ensure_file(&dir.join(DESCRIPTION_FILE))?);
        Ok(outcome)
    }

    /// components_dir 配下に閉じたパスを組み立てる
    fn confined(&self, segments: &[&str]) -> Result<PathBuf> {
        let mut path = self.components_dir.clone();
        for segment in segments {
            let relative = Path::new(segment);
            let is_plain = check_slug(segment).is_ok()
                && relative.components().count() == 1
                && matches!(relative.components().next(), Some(PathComponent::Normal(_)));
            if !is_plain {
                return Err(AstrumError::UnsafePath(path.join(segment)));
            }
            path.push(relative);
        }
        Ok(path)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<ScaffoldOutcome> {
        if self.fs.is_dir(dir) {
            return Ok(ScaffoldOutcome::default());
        }
        self.fs.create_dir_all(dir)?;
        tracing::debug!(path = %dir.display(), "created directory");
        Ok(ScaffoldOutcome {
            created: vec![dir.to_path_buf()],
        })
    }

    fn ensure_file(&self, path: &Path) -> Result<ScaffoldOutcome> {
        if !self.fs.create_new(path, b"")? {
            return Ok(ScaffoldOutcome::default());
        }
        tracing::debug!(path = %path.display(), "created placeholder");
        Ok(ScaffoldOutcome {
            created: vec![path.to_path_buf()],
        })
    }
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
