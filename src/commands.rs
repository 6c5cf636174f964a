use crate::cli::Command;
use astrum_figma::document::DataFile;
use astrum_figma::fs::RealFs;
use astrum_figma::workspace::Workspace;
use owo_colors::OwoColorize;
use std::env;

pub mod edit;
pub mod fetch;
pub mod info;
pub mod overview;

/// サブコマンドを実行
///
/// サブコマンドなしの場合は `overview` を実行する。
pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        None => overview::run().await,
        Some(Command::Info) => info::run().await,
        Some(Command::Edit) => edit::run().await,
        Some(Command::Fetch) => fetch::run().await,
    }
}

/// ワークスペースと data.json を開く
pub(crate) fn open_workspace() -> Result<(Workspace, DataFile<'static>), String> {
    let cwd = env::current_dir().map_err(|e| e.to_string())?;
    let workspace = Workspace::discover(&cwd, &RealFs).map_err(|e| e.to_string())?;
    let data = DataFile::load(workspace.data_file(), &RealFs).map_err(|e| e.to_string())?;
    Ok((workspace, data))
}

/// 設定がない旨を表示
pub(crate) fn print_settings_missing() {
    println!("{}", "No Figma settings found!".red());
}
