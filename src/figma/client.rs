//! Figma API クライアント

use super::{parse_components, RemoteNode};
use crate::config::{AuthProvider, HttpConfig};
use crate::error::{AstrumError, Result};
use reqwest::Client;

/// 認証ヘッダー名
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Figma API クライアント
pub struct FigmaClient {
    http: Client,
    auth: AuthProvider,
    api_base: String,
}

impl FigmaClient {
    /// 新しいFigmaClientを作成
    pub fn new(config: &HttpConfig, auth: &AuthProvider) -> Self {
        Self {
            http: config.build_client(),
            auth: auth.clone(),
            api_base: config.api_base.clone(),
        }
    }

    /// ファイル API URL
    fn file_url(&self, file_key: &str) -> String {
        format!("{}/files/{}", self.api_base, file_key)
    }

    /// ファイル内のコンポーネント定義を取得
    pub async fn file_components(&self, file_key: &str) -> Result<Vec<RemoteNode>> {
        let token = self.auth.figma_token().ok_or(AstrumError::SettingsMissing)?;
        let url = self.file_url(file_key);
        tracing::debug!(%url, "requesting Figma file");

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AstrumError::FigmaApi { status, message });
        }

        let body = response.text().await?;
        let nodes = parse_components(&body)?;
        tracing::debug!(count = nodes.len(), "received component definitions");
        Ok(nodes)
    }
}
