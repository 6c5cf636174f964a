/// Figma トークンを上書きする環境変数
pub const FIGMA_TOKEN: &str = "FIGMA_TOKEN";

/// Figma API のベース URL を上書きする環境変数
pub const FIGMA_API_URL: &str = "FIGMA_API_URL";

/// パターンライブラリのルートを上書きする環境変数
pub const ASTRUM_PATH: &str = "ASTRUM_PATH";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}
