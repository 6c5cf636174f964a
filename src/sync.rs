//! 同期 Feature
//!
//! Figma のコンポーネント定義をレジストリとスキャフォールドに反映する。
//!
//! ## 使い方
//!
//! ```ignore
//! let mut data = DataFile::load(workspace.data_file(), &RealFs)?;
//! let registry = data.registry();
//! let scaffold = ScaffoldBuilder::new(workspace.components_dir(), &RealFs);
//!
//! let mut orchestrator = SyncOrchestrator::new(registry, scaffold, &mut data);
//! let report = orchestrator.sync(&nodes);
//!
//! println!("Created: {}", report.create_count());
//! println!("Skipped: {}", report.skip_count());
//! ```
//!
//! ノードは 1 件ずつ順番に処理する。各ノードについて
//! スキャフォールド作成 → レジストリへの挿入 → 永続化 の順で行い、
//! 永続化に失敗した場合は挿入を取り消す。

mod action;
mod report;

pub use action::SyncAction;
pub use report::{CreatedItem, SkipReason, SkippedItem, SyncFailure, SyncReport};

use crate::document::RegistryStore;
use crate::error::Result;
use crate::figma::RemoteNode;
use crate::naming::{self, ParsedIdentity};
use crate::registry::{Component, Group, Registry};
use crate::scaffold::ScaffoldBuilder;
use std::path::PathBuf;

/// 同期オーケストレーター
pub struct SyncOrchestrator<'a, S: RegistryStore> {
    registry: Registry,
    scaffold: ScaffoldBuilder<'a>,
    store: S,
}

impl<'a, S: RegistryStore> SyncOrchestrator<'a, S> {
    pub fn new(registry: Registry, scaffold: ScaffoldBuilder<'a>, store: S) -> Self {
        Self {
            registry,
            scaffold,
            store,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// ノード一覧を同期
    ///
    /// 個々のノードの失敗は `SyncReport` に記録し、残りのノードの処理を続ける。
    pub fn sync(&mut self, nodes: &[RemoteNode]) -> SyncReport {
        let mut report = SyncReport::default();

        for node in nodes {
            self.sync_node(node, &mut report);
        }

        tracing::info!(
            created = report.create_count(),
            skipped = report.skip_count(),
            failed = report.failure_count(),
            excluded = report.exclude_count(),
            "sync finished"
        );
        report
    }

    fn sync_node(&mut self, node: &RemoteNode, report: &mut SyncReport) {
        // 1. 内部ノードは除外
        if node.is_reserved() {
            tracing::debug!(node_id = %node.node_id, "excluding reserved node");
            report.excluded.push(node.clone());
            return;
        }

        // 2. 名前のパース
        let identity = match naming::parse(&node.raw_name) {
            Ok(identity) => identity,
            Err(rejection) => {
                tracing::debug!(node_id = %node.node_id, %rejection, "skipping invalid name");
                report.skipped.push(SkippedItem {
                    node: node.clone(),
                    identity: None,
                    reason: SkipReason::InvalidName(rejection),
                });
                return;
            }
        };

        // 3. 新規グループか既存グループか
        let action = if !self.registry.group_exists(identity.group_slug()) {
            SyncAction::AddGroup
        } else if self
            .registry
            .component_exists(identity.group_slug(), identity.component_slug())
        {
            tracing::debug!(node_id = %node.node_id, %identity, "skipping duplicate");
            report.skipped.push(SkippedItem {
                node: node.clone(),
                identity: Some(identity),
                reason: SkipReason::Duplicate,
            });
            return;
        } else {
            SyncAction::AddComponent
        };

        // 4. 反映
        match self.apply(node, &identity, action) {
            Ok(paths) => report.created.push(CreatedItem {
                node: node.clone(),
                identity,
                action,
                paths,
            }),
            Err(e) => {
                tracing::warn!(node_id = %node.node_id, %identity, error = %e, "import failed");
                report
                    .failed
                    .push(SyncFailure::new(node.clone(), identity, action, e.to_string()));
            }
        }
    }

    /// スキャフォールド作成 → 挿入 → 永続化
    fn apply(
        &mut self,
        node: &RemoteNode,
        identity: &ParsedIdentity,
        action: SyncAction,
    ) -> Result<Vec<PathBuf>> {
        let group = identity.group_slug();
        let mut paths = Vec::new();

        if action == SyncAction::AddGroup {
            paths.extend(self.scaffold.ensure_group_scaffold(group)?.created);
        }
        paths.extend(
            self.scaffold
                .ensure_component_scaffold(group, identity.component_slug())?
                .created,
        );

        let snapshot = self.registry.clone();
        match action {
            SyncAction::AddGroup => {
                self.registry
                    .insert_group(Group::from_identity(identity, &node.node_id))?;
            }
            SyncAction::AddComponent => {
                self.registry
                    .insert_component(group, Component::from_identity(identity, &node.node_id))?;
            }
        }

        if let Err(e) = self.store.persist(&self.registry) {
            self.registry = snapshot;
            return Err(e);
        }

        tracing::debug!(%identity, action = action.display_name(), "imported");
        Ok(paths)
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
