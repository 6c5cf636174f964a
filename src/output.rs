use crate::sync::SyncReport;
use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(report: &SyncReport) -> Self {
        let created = report.create_count();
        let skipped = report.skip_count();
        match (created, report.failure_count()) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "{} imported, {} skipped, {} failed",
                    created.green(),
                    skipped.yellow(),
                    f.red()
                ),
            },
            (c, _) if c > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} component(s) imported, {} skipped",
                    c.green(),
                    skipped.yellow()
                ),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No new components ({} skipped)", skipped),
            },
        }
    }
}

/// シークレットの末尾 4 文字以外を伏せる
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
