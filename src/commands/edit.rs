//! astrum-figma edit コマンド
//!
//! Figma のアクセストークンとファイル URL を対話的に設定する。

use astrum_figma::document::DataFile;
use astrum_figma::figma::file_key;
use astrum_figma::output::mask_secret;
use astrum_figma::prompt::Prompter;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

pub async fn run() -> Result<(), String> {
    let (_, mut data) = super::open_workspace()?;
    edit_settings(&mut data, &mut Prompter::stdio())
}

/// 設定を入力させて保存
///
/// 現在の設定があれば各入力のデフォルト値にする。
pub fn edit_settings<R: BufRead, W: Write>(
    data: &mut DataFile<'_>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), String> {
    let (current_token, current_url) = data
        .document()
        .figma
        .as_ref()
        .map(|s| (s.token.clone(), s.url.clone()))
        .unwrap_or_default();

    prompter
        .note(
            "Figma Personal Access Token:",
            &[
                "For instructions on how to locate your personal access token visit this URL:",
                "https://www.figma.com/developers/api#access-tokens",
            ],
        )
        .map_err(|e| e.to_string())?;
    let masked = mask_secret(&current_token);
    let token = prompter
        .ask_required(
            "Figma Personal Access Token",
            Some(current_token.as_str()),
            Some(masked.as_str()),
        )
        .map_err(|e| e.to_string())?;

    prompter
        .note(
            "Figma File URL:",
            &["Provide the URL to the Figma file containing the components you want to import."],
        )
        .map_err(|e| e.to_string())?;
    let url = loop {
        let url = prompter
            .ask_required("Figma file URL", Some(current_url.as_str()), None)
            .map_err(|e| e.to_string())?;
        match file_key(&url) {
            Ok(_) => break url,
            Err(e) => println!("{}", e.to_string().red()),
        }
    };

    data.set_figma(token, url);
    data.save().map_err(|e| e.to_string())?;

    println!();
    println!("{}", "✓ Figma settings saved successfully.".green());
    println!();
    Ok(())
}
