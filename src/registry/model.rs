//! レジストリのグループ/コンポーネント定義
//!
//! data.json の `groups` 配列と 1 対 1 で対応する。
//! 未知のフィールドは `extra` に保持し、書き戻し時に失わない。

use crate::error::{AstrumError, Result};
use crate::naming::{check_slug, ParsedIdentity};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// コンポーネントの表示幅
///
/// 既知の値以外もそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Width {
    Full,
    #[default]
    Half,
    Other(String),
}

impl Width {
    pub fn as_str(&self) -> &str {
        match self {
            Width::Full => "full",
            Width::Half => "half",
            Width::Other(value) => value,
        }
    }
}

impl From<String> for Width {
    fn from(value: String) -> Self {
        match value.as_str() {
            "full" => Width::Full,
            "half" => Width::Half,
            _ => Width::Other(value),
        }
    }
}

impl From<Width> for String {
    fn from(width: Width) -> Self {
        width.as_str().to_string()
    }
}

/// コンポーネント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub group: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub width: Width,
    #[serde(
        rename = "nodeId",
        alias = "nodeID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub node_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    /// 新しいコンポーネントを作成
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        node_id: Option<String>,
    ) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        check_slug(&group).map_err(|e| AstrumError::InvalidIdentity(e.to_string()))?;
        check_slug(&name).map_err(|e| AstrumError::InvalidIdentity(e.to_string()))?;

        Ok(Self {
            group,
            name,
            title: title.into(),
            width: Width::default(),
            node_id,
            extra: Map::new(),
        })
    }

    /// パース済み識別子から作成
    pub fn from_identity(identity: &ParsedIdentity, node_id: impl Into<String>) -> Self {
        Self {
            group: identity.group_slug().to_string(),
            name: identity.component_slug().to_string(),
            title: identity.component_title().to_string(),
            width: Width::default(),
            node_id: Some(node_id.into()),
            extra: Map::new(),
        }
    }
}

/// グループ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Group {
    /// 空のグループを作成
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_slug(&name).map_err(|e| AstrumError::InvalidIdentity(e.to_string()))?;

        Ok(Self {
            name,
            title: title.into(),
            components: Vec::new(),
            extra: Map::new(),
        })
    }

    /// パース済み識別子から、最初のコンポーネントを 1 つ持つグループを作成
    pub fn from_identity(identity: &ParsedIdentity, node_id: impl Into<String>) -> Self {
        Self {
            name: identity.group_slug().to_string(),
            title: identity.group_title().to_string(),
            components: vec![Component::from_identity(identity, node_id)],
            extra: Map::new(),
        }
    }

    /// コンポーネントの位置を取得
    pub fn component_index(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    /// コンポーネントが存在するか
    pub fn has_component(&self, name: &str) -> bool {
        self.component_index(name).is_some()
    }
}
