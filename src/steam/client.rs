use tracing::{error, warn};

use crate::{config::Config, error::AppError, routes::check::SteamId};

/// GetPlayerBans 接口客户端，每次未命中缓存只请求一次，不重试
#[derive(Debug, Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl SteamClient {
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            reqwest::Client::new(),
            config.steam_api_url.clone(),
            config.steam_api_key.clone(),
        )
    }

    /// 获取原始响应体
    ///
    /// 网络错误、非 2xx 状态和空响应体都归为 [`AppError::UpstreamUnavailable`]。
    pub async fn fetch_player_bans(&self, steam_id: &SteamId) -> Result<String, AppError> {
        let steam_ids = steam_id.as_u64().to_string();
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamids", steam_ids.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // 不记录带 key 的完整 URL
                error!("Steam request failed for {}: {}", steam_id, e.without_url());
                AppError::UpstreamUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Steam returned {} for {}", status, steam_id);
            return Err(AppError::UpstreamUnavailable);
        }

        let body = response.text().await.map_err(|e| {
            error!(
                "Failed to read Steam response for {}: {}",
                steam_id,
                e.without_url()
            );
            AppError::UpstreamUnavailable
        })?;

        if body.is_empty() {
            warn!("Steam returned an empty body for {}", steam_id);
            return Err(AppError::UpstreamUnavailable);
        }

        Ok(body)
    }
}
