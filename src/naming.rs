//! Figma コンポーネント名のパース
//!
//! `"Buttons/Primary"` のようなリモートノード名を
//! グループとコンポーネントの識別子に分解する。
//!
//! - 区切り文字 `/` で分割し、各セグメントの前後の空白は除去する
//! - セグメントが 1 つだけの場合はデフォルトグループ（Untitled Group）に割り当てる
//! - 3 階層以上は 2 番目以降を `-` で連結し、1 つのコンポーネントにまとめる

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// 名前の階層区切り
pub const PATH_SEPARATOR: char = '/';

/// スラッグ化・階層連結に使う区切り
pub const SLUG_SEPARATOR: &str = "-";

/// 区切りのない名前が割り当てられるグループのタイトル
pub const DEFAULT_GROUP_TITLE: &str = "Untitled Group";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// パース済みのグループ/コンポーネント識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentity {
    group_slug: String,
    group_title: String,
    component_slug: String,
    component_title: String,
}

impl ParsedIdentity {
    /// グループタイトルとコンポーネントタイトルから識別子を作成
    ///
    /// スラッグはタイトルから導出し、空やパス操作になり得る値は拒否する。
    pub fn new(group_title: &str, component_title: &str) -> Result<Self, NameRejection> {
        let group_title = group_title.trim();
        let component_title = component_title.trim();

        if group_title.is_empty() {
            return Err(NameRejection::MissingGroup);
        }
        if component_title.is_empty() {
            return Err(NameRejection::MissingTitle);
        }

        let group_slug = slugify(group_title);
        let component_slug = slugify(component_title);
        check_slug(&group_slug)?;
        check_slug(&component_slug)?;

        Ok(Self {
            group_slug,
            group_title: group_title.to_string(),
            component_slug,
            component_title: component_title.to_string(),
        })
    }

    pub fn group_slug(&self) -> &str {
        &self.group_slug
    }

    pub fn group_title(&self) -> &str {
        &self.group_title
    }

    pub fn component_slug(&self) -> &str {
        &self.component_slug
    }

    pub fn component_title(&self) -> &str {
        &self.component_title
    }

    /// デフォルトグループに割り当てられたか
    pub fn is_default_group(&self) -> bool {
        self.group_slug == default_group_slug()
    }
}

impl std::fmt::Display for ParsedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group_slug, self.component_slug)
    }
}

/// 取り込み対象外と判定された理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameRejection {
    #[error("name is empty")]
    Empty,

    #[error("group segment is empty")]
    MissingGroup,

    #[error("component title is empty")]
    MissingTitle,

    #[error("'{0}' cannot be used as a directory name")]
    UnsafeSlug(String),
}

/// リモートノード名をパース
pub fn parse(raw_name: &str) -> Result<ParsedIdentity, NameRejection> {
    if raw_name.trim().is_empty() {
        return Err(NameRejection::Empty);
    }

    let mut segments = raw_name.split(PATH_SEPARATOR).map(str::trim);
    let first = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();

    if raw_name.contains(PATH_SEPARATOR) {
        ParsedIdentity::new(first, &rest.join(SLUG_SEPARATOR))
    } else {
        ParsedIdentity::new(DEFAULT_GROUP_TITLE, first)
    }
}

/// タイトルをスラッグに変換
///
/// ASCII の大文字のみ小文字化し、連続する空白は 1 つの `-` に置き換える。
pub fn slugify(title: &str) -> String {
    WHITESPACE
        .replace_all(&title.trim().to_ascii_lowercase(), SLUG_SEPARATOR)
        .into_owned()
}

/// デフォルトグループのスラッグ
pub fn default_group_slug() -> String {
    slugify(DEFAULT_GROUP_TITLE)
}

/// ディレクトリ名として安全なスラッグか検証
pub fn check_slug(slug: &str) -> Result<(), NameRejection> {
    let unsafe_slug = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug.contains(PATH_SEPARATOR)
        || slug.contains('\\')
        || slug.contains('\0');

    if unsafe_slug {
        return Err(NameRejection::UnsafeSlug(slug.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
