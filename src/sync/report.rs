//! 同期結果の定義

use super::action::SyncAction;
use crate::figma::RemoteNode;
use crate::naming::{NameRejection, ParsedIdentity};
use std::path::PathBuf;

/// 同期結果
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// 追加されたコンポーネント
    pub created: Vec<CreatedItem>,
    /// スキップされたノード（不正な名前・重複）
    pub skipped: Vec<SkippedItem>,
    /// 失敗したノード
    pub failed: Vec<SyncFailure>,
    /// 内部ノードとして除外されたノード
    pub excluded: Vec<RemoteNode>,
}

impl SyncReport {
    /// 全ノード数
    pub fn total_count(&self) -> usize {
        self.created.len() + self.skipped.len() + self.failed.len() + self.excluded.len()
    }

    /// 追加数
    pub fn create_count(&self) -> usize {
        self.created.len()
    }

    /// 新規グループ数
    pub fn group_count(&self) -> usize {
        self.created
            .iter()
            .filter(|c| c.action == SyncAction::AddGroup)
            .count()
    }

    /// スキップ数
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// 重複によるスキップ数
    pub fn duplicate_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::Duplicate)
            .count()
    }

    /// 失敗数
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// 除外数
    pub fn exclude_count(&self) -> usize {
        self.excluded.len()
    }

    /// 結果が空か（ノードが 1 件もなかった）
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// 全て成功したか
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 追加されたコンポーネント
#[derive(Debug, Clone)]
pub struct CreatedItem {
    pub node: RemoteNode,
    pub identity: ParsedIdentity,
    pub action: SyncAction,
    /// 新たに作成したスキャフォールドのパス
    pub paths: Vec<PathBuf>,
}

/// スキップ理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 名前をパースできない
    InvalidName(NameRejection),
    /// 同じグループに同名コンポーネントが既にある
    Duplicate,
}

impl SkipReason {
    /// 表示名を取得
    pub fn display_name(&self) -> String {
        match self {
            SkipReason::InvalidName(rejection) => format!("invalid name ({})", rejection),
            SkipReason::Duplicate => "already exists".to_string(),
        }
    }
}

/// スキップされたノード
#[derive(Debug, Clone)]
pub struct SkippedItem {
    pub node: RemoteNode,
    /// パースできた場合の識別子
    pub identity: Option<ParsedIdentity>,
    pub reason: SkipReason,
}

/// 取り込み失敗
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub node: RemoteNode,
    pub identity: ParsedIdentity,
    /// 試行したアクション
    pub action: SyncAction,
    /// エラーメッセージ
    pub error: String,
}

impl SyncFailure {
    pub fn new(
        node: RemoteNode,
        identity: ParsedIdentity,
        action: SyncAction,
        error: impl Into<String>,
    ) -> Self {
        Self {
            node,
            identity,
            action,
            error: error.into(),
        }
    }
}
