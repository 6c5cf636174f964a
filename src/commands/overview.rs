//! サブコマンドなしで実行された場合
//!
//! 設定がなければ入力を求め、あればヘルプを表示する。

use super::edit::edit_settings;
use crate::cli::Cli;
use astrum_figma::prompt::Prompter;
use clap::CommandFactory;

pub async fn run() -> Result<(), String> {
    let (_, mut data) = super::open_workspace()?;

    if data.figma().is_none() {
        super::print_settings_missing();
        return edit_settings(&mut data, &mut Prompter::stdio());
    }

    Cli::command().print_help().map_err(|e| e.to_string())?;
    println!();
    Ok(())
}
