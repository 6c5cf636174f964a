//! HTTP設定と認証プロバイダー

use crate::env::{self, EnvVar};
use reqwest::Client;
use std::time::Duration;

/// Figma REST API のベース URL
pub const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
    /// API ベース URL
    pub api_base: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "astrum-figma".to_string(),
            api_base: FIGMA_API_BASE.to_string(),
        }
    }
}

impl HttpConfig {
    /// 環境変数を反映した設定
    ///
    /// `FIGMA_API_URL` が設定されていればベース URL を上書きする。
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = EnvVar::get(env::FIGMA_API_URL) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 認証プロバイダー
///
/// トークンの取得元を管理する。
/// 優先順位: 明示的なトークン > 環境変数 FIGMA_TOKEN > data.json の設定
#[derive(Debug, Clone, Default)]
pub struct AuthProvider {
    explicit_token: Option<String>,
    stored_token: Option<String>,
}

impl AuthProvider {
    /// 新しいAuthProviderを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 明示的なトークンを設定
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.explicit_token = Some(token.into());
        self
    }

    /// data.json に保存されたトークンを設定
    pub fn with_stored_token(mut self, token: impl Into<String>) -> Self {
        self.stored_token = Some(token.into()).filter(|t: &String| !t.trim().is_empty());
        self
    }

    /// Figma トークンを取得
    pub fn figma_token(&self) -> Option<String> {
        self.explicit_token
            .clone()
            .or_else(|| EnvVar::get(env::FIGMA_TOKEN))
            .or_else(|| self.stored_token.clone())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
