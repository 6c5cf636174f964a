//! Figma REST API
//!
//! ファイル内のコンポーネント定義を取得し、[`RemoteNode`] の一覧に変換する。
//!
//! ```ignore
//! let client = FigmaClient::new(&HttpConfig::from_env(), &auth);
//! let nodes = client.file_components(&file_key(&settings.url)?).await?;
//! ```

mod client;
mod file_key;

pub use client::FigmaClient;
pub use file_key::file_key;

use crate::error::{AstrumError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// 取り込み対象外を示すノード ID の先頭文字
pub const RESERVED_PREFIX: char = '-';

/// Figma 上のコンポーネント定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNode {
    pub node_id: String,
    pub raw_name: String,
}

impl RemoteNode {
    pub fn new(node_id: impl Into<String>, raw_name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            raw_name: raw_name.into(),
        }
    }

    /// 内部ノード（取り込み対象外）かどうか
    pub fn is_reserved(&self) -> bool {
        self.node_id.starts_with(RESERVED_PREFIX)
    }
}

/// `GET /files/:key` のレスポンス（必要な部分のみ）
#[derive(Debug, Deserialize)]
struct FileResponse {
    #[serde(default)]
    components: Map<String, Value>,
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    err: Option<String>,
}

/// ファイルレスポンスの JSON からコンポーネント一覧を取り出す
///
/// 順序はレスポンス内の出現順。`name` を持たない定義は空の名前として返し、
/// 名前のパースで除外させる。
pub fn parse_components(body: &str) -> Result<Vec<RemoteNode>> {
    let response: FileResponse = serde_json::from_str(body)?;

    if let Some(message) = response.err {
        return Err(AstrumError::FigmaApi {
            status: response.status.unwrap_or_default(),
            message,
        });
    }

    Ok(response
        .components
        .into_iter()
        .map(|(node_id, definition)| {
            let name = definition
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            RemoteNode::new(node_id, name)
        })
        .collect())
}
