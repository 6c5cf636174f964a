//! astrum-figma info コマンド
//!
//! 保存されている Figma 設定を表示する。未設定の場合は入力を求める。

use super::edit::edit_settings;
use astrum_figma::document::FigmaSettings;
use astrum_figma::figma::file_key;
use astrum_figma::output::mask_secret;
use astrum_figma::prompt::Prompter;
use astrum_figma::registry::Registry;
use astrum_figma::workspace::Workspace;
use comfy_table::{presets::UTF8_FULL, Table};

pub async fn run() -> Result<(), String> {
    let (workspace, mut data) = super::open_workspace()?;

    if data.figma().is_none() {
        super::print_settings_missing();
        return edit_settings(&mut data, &mut Prompter::stdio());
    }

    if let Some(settings) = data.figma() {
        println!("{}", settings_table(&workspace, settings, &data.registry()));
    }
    Ok(())
}

fn settings_table(workspace: &Workspace, settings: &FigmaSettings, registry: &Registry) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    let key = file_key(&settings.url).unwrap_or_else(|_| "(invalid URL)".to_string());
    let last_fetched = settings
        .last_fetched
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string());

    table.add_row(vec!["Personal Access Token".to_string(), mask_secret(&settings.token)]);
    table.add_row(vec!["File URL".to_string(), settings.url.clone()]);
    table.add_row(vec!["File key".to_string(), key]);
    table.add_row(vec!["Last fetched".to_string(), last_fetched]);
    table.add_row(vec![
        "Pattern library".to_string(),
        workspace.root().display().to_string(),
    ]);
    table.add_row(vec![
        "Registry".to_string(),
        format!(
            "{} group(s), {} component(s)",
            registry.len(),
            registry.component_count()
        ),
    ]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_table_masks_token() {
        let workspace = Workspace::new("/project/pattern-library");
        let settings = FigmaSettings::new("figd_secret_9876", "https://www.figma.com/file/KEY/Kit");

        let rendered = settings_table(&workspace, &settings, &Registry::default()).to_string();

        assert!(!rendered.contains("figd_secret"));
        assert!(rendered.contains("9876"));
        assert!(rendered.contains("KEY"));
        assert!(rendered.contains("Never"));
        assert!(rendered.contains("0 group(s), 0 component(s)"));
    }
}
