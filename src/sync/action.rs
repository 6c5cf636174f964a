//! 取り込みアクションの定義

/// 取り込みアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// 新しいグループとその最初のコンポーネントを追加
    AddGroup,
    /// 既存グループにコンポーネントを追加
    AddComponent,
}

impl SyncAction {
    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            SyncAction::AddGroup => "New group",
            SyncAction::AddComponent => "New component",
        }
    }

    /// アイコンを取得
    pub fn icon(&self) -> &'static str {
        match self {
            SyncAction::AddGroup => "+",
            SyncAction::AddComponent => "~",
        }
    }
}
