//! astrum-figma fetch コマンド
//!
//! Figma ファイルのコンポーネントを取得し、パターンライブラリに追加する。

use super::edit::edit_settings;
use astrum_figma::config::{AuthProvider, HttpConfig};
use astrum_figma::document::FigmaSettings;
use astrum_figma::figma::{file_key, FigmaClient, RemoteNode};
use astrum_figma::fs::RealFs;
use astrum_figma::output::CommandSummary;
use astrum_figma::prompt::Prompter;
use astrum_figma::scaffold::{ScaffoldBuilder, DESCRIPTION_FILE, MARKUP_FILE};
use astrum_figma::sync::{SyncAction, SyncOrchestrator, SyncReport};
use astrum_figma::workspace::Workspace;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub async fn run() -> Result<(), String> {
    let (workspace, mut data) = super::open_workspace()?;

    let Some(settings) = data.figma().cloned() else {
        super::print_settings_missing();
        return edit_settings(&mut data, &mut Prompter::stdio());
    };

    // 取得失敗は 0 件として扱う
    let fetched = fetch_nodes(&settings).await;
    let reached = fetched.is_some();
    let nodes = fetched.unwrap_or_default();

    let registry = data.registry();
    let scaffold = ScaffoldBuilder::new(workspace.components_dir(), &RealFs);
    let report = SyncOrchestrator::new(registry, scaffold, &mut data).sync(&nodes);

    if reached {
        data.mark_fetched(Utc::now());
        if let Err(e) = data.save() {
            tracing::warn!(error = %e, "failed to record fetch time");
        }
    }

    print_report(&report, &workspace, reached);

    // 失敗があれば非0終了
    if report.failure_count() > 0 {
        return Err(format!(
            "{} component(s) failed to import",
            report.failure_count()
        ));
    }

    Ok(())
}

/// コンポーネント定義を取得（失敗時は警告を表示して None）
async fn fetch_nodes(settings: &FigmaSettings) -> Option<Vec<RemoteNode>> {
    let key = match file_key(&settings.url) {
        Ok(key) => key,
        Err(e) => {
            print_fetch_warning(&e.to_string());
            return None;
        }
    };

    let auth = AuthProvider::new().with_stored_token(settings.token.clone());
    let client = FigmaClient::new(&HttpConfig::from_env(), &auth);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Fetching components from Figma...")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = client.file_components(&key).await;
    pb.finish_and_clear();

    match result {
        Ok(nodes) => Some(nodes),
        Err(e) => {
            tracing::warn!(error = %e, remote = e.is_remote(), "fetch failed");
            print_fetch_warning(&e.to_string());
            None
        }
    }
}

fn print_fetch_warning(message: &str) {
    println!(
        "{} Could not fetch components from Figma: {}",
        "!".yellow(),
        message
    );
    println!("  Continuing with no components.\n");
}

fn print_report(report: &SyncReport, workspace: &Workspace, reached: bool) {
    if report.is_empty() {
        // 取得できなかった場合は警告を表示済み
        if reached {
            println!("No components found in the Figma file.");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Node", "Group", "Component", "Action"]);

    for item in &report.created {
        let color = match item.action {
            SyncAction::AddGroup => Color::Green,
            SyncAction::AddComponent => Color::Cyan,
        };
        table.add_row(vec![
            Cell::new(&item.node.node_id),
            Cell::new(item.identity.group_title()),
            Cell::new(item.identity.component_title()),
            Cell::new(format!("{} {}", item.action.icon(), item.action.display_name())).fg(color),
        ]);
    }

    for item in &report.skipped {
        let (group, component) = match &item.identity {
            Some(identity) => (identity.group_title(), identity.component_title()),
            None => ("-", item.node.raw_name.as_str()),
        };
        table.add_row(vec![
            Cell::new(&item.node.node_id),
            Cell::new(group),
            Cell::new(component),
            Cell::new(format!("Skip ({})", item.reason.display_name())).fg(Color::DarkGrey),
        ]);
    }

    for failure in &report.failed {
        table.add_row(vec![
            Cell::new(&failure.node.node_id),
            Cell::new(failure.identity.group_title()),
            Cell::new(failure.identity.component_title()),
            Cell::new("Failed").fg(Color::Red),
        ]);
    }

    println!("{table}");

    // サマリー
    let summary = CommandSummary::format(report);
    println!("\n{} {}", summary.prefix, summary.message);
    if report.exclude_count() > 0 {
        println!(
            "  {} internal node(s) excluded",
            report.exclude_count().to_string().dimmed()
        );
    }

    // 次の作業の案内
    if !report.created.is_empty() {
        println!();
        let components = workspace.components_dir();
        for item in &report.created {
            let group_dir = components.join(item.identity.group_slug());
            let component_dir = group_dir.join(item.identity.component_slug());
            if item.action == SyncAction::AddGroup {
                println!(
                    "{}",
                    format!(
                        "Add your group description to {} (Markdown supported)",
                        group_dir.join(DESCRIPTION_FILE).display()
                    )
                    .yellow()
                );
            }
            println!(
                "{}",
                format!(
                    "Add your component markup to {}",
                    component_dir.join(MARKUP_FILE).display()
                )
                .yellow()
            );
            println!(
                "{}",
                format!(
                    "Add your component description to {} (Markdown supported)",
                    component_dir.join(DESCRIPTION_FILE).display()
                )
                .yellow()
            );
        }
    }

    // 失敗
    if !report.failed.is_empty() {
        println!("\n{}", "Failed items:".red().bold());
        for failure in &report.failed {
            println!(
                "  {} ({}): {} - {}",
                failure.identity.to_string().red(),
                failure.node.node_id,
                failure.action.display_name(),
                failure.error
            );
        }
    }
}
