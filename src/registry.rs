//! コンポーネントレジストリ
//!
//! グループとコンポーネントの順序付きコレクション。
//!
//! ## 挿入位置
//!
//! 末尾固定のグループ（デフォルトでは `untitled-group`）が最後にある場合、
//! 新しいグループはその直前に挿入される。それ以外は末尾に追加する。
//! コンポーネントも同じ規則で、末尾固定コンポーネントが設定されていればその直前に入る。
//! 一度配置されたエントリの相対順序は以後の挿入で変わらない。

mod model;

pub use model::{Component, Group, Width};

use crate::error::{AstrumError, Result};
use crate::naming::default_group_slug;

/// 順序付きのグループ/コンポーネントレジストリ
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    groups: Vec<Group>,
    /// 常に最後に置かれるグループのスラッグ
    trailing_group: Option<String>,
    /// 各グループ内で常に最後に置かれるコンポーネントのスラッグ
    trailing_component: Option<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Registry {
    /// 永続化済みのグループ一覧からレジストリを作成
    pub fn new(mut groups: Vec<Group>) -> Self {
        for group in &mut groups {
            for component in &mut group.components {
                if component.group.is_empty() {
                    component.group = group.name.clone();
                }
            }
        }

        Self {
            groups,
            trailing_group: Some(default_group_slug()),
            trailing_component: None,
        }
    }

    /// グループ名とグループ内のコンポーネント名が一意か検証
    pub fn check_unique(groups: &[Group]) -> Result<()> {
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|g| g.name == group.name) {
                return Err(AstrumError::DuplicateGroup(group.name.clone()));
            }
            for (j, component) in group.components.iter().enumerate() {
                if group.components[..j].iter().any(|c| c.name == component.name) {
                    return Err(AstrumError::DuplicateComponent {
                        group: group.name.clone(),
                        component: component.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 末尾固定グループを設定（None で無効化）
    pub fn with_trailing_group(mut self, slug: Option<impl Into<String>>) -> Self {
        self.trailing_group = slug.map(Into::into);
        self
    }

    /// 末尾固定コンポーネントを設定（None で無効化）
    pub fn with_trailing_component(mut self, slug: Option<impl Into<String>>) -> Self {
        self.trailing_component = slug.map(Into::into);
        self
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, slug: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == slug)
    }

    pub fn group_exists(&self, slug: &str) -> bool {
        self.group_index(slug).is_some()
    }

    pub fn group_index(&self, slug: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == slug)
    }

    pub fn component_exists(&self, group_slug: &str, component_slug: &str) -> bool {
        self.group(group_slug)
            .is_some_and(|g| g.has_component(component_slug))
    }

    /// グループ数
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 全グループのコンポーネント総数
    pub fn component_count(&self) -> usize {
        self.groups.iter().map(|g| g.components.len()).sum()
    }

    /// グループを挿入し、挿入位置を返す
    ///
    /// 同名のグループが既にある場合は Err。
    pub fn insert_group(&mut self, mut group: Group) -> Result<usize> {
        if self.group_exists(&group.name) {
            return Err(AstrumError::DuplicateGroup(group.name));
        }

        Self::check_unique(std::slice::from_ref(&group))?;
        for component in &mut group.components {
            component.group = group.name.clone();
        }

        let position = insert_position(
            self.groups.last().map(|g| g.name.as_str()),
            self.groups.len(),
            self.trailing_group.as_deref(),
            &group.name,
        );
        self.groups.insert(position, group);
        Ok(position)
    }

    /// グループにコンポーネントを挿入し、グループ内の挿入位置を返す
    ///
    /// グループが存在しない、または同名コンポーネントがある場合は Err。
    pub fn insert_component(&mut self, group_slug: &str, mut component: Component) -> Result<usize> {
        let index = self
            .group_index(group_slug)
            .ok_or_else(|| AstrumError::GroupNotFound(group_slug.to_string()))?;

        let group = &mut self.groups[index];
        if group.has_component(&component.name) {
            return Err(AstrumError::DuplicateComponent {
                group: group_slug.to_string(),
                component: component.name,
            });
        }
        component.group = group.name.clone();

        let position = insert_position(
            group.components.last().map(|c| c.name.as_str()),
            group.components.len(),
            self.trailing_component.as_deref(),
            &component.name,
        );
        group.components.insert(position, component);
        Ok(position)
    }
}

/// 末尾固定スロットを考慮した挿入位置
///
/// 末尾の要素が固定スロットで、挿入する要素自身がそれでなければ直前に入れる。
fn insert_position(last: Option<&str>, len: usize, trailing: Option<&str>, inserting: &str) -> usize {
    match (last, trailing) {
        (Some(last), Some(trailing)) if last == trailing && inserting != trailing => len - 1,
        _ => len,
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
