use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, warn};

use crate::{AppState, cache::keys::ban_key, error::AppError};

use super::model::{CheckQuery, OutputVersion, SteamId, format_output};

/// 查询玩家封禁状态
///
/// 校验 → 读缓存 → 未命中时请求 Steam 并写缓存 → 按 `v` 格式化。
#[axum::debug_handler]
pub async fn check_bans(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = query.map_err(|e| {
        warn!("Rejected malformed query string: {}", e);
        AppError::InvalidInput
    })?;
    let query = CheckQuery::from_pairs(pairs);

    let steam_id = query
        .s
        .as_deref()
        .and_then(SteamId::parse)
        .ok_or(AppError::InvalidInput)?;
    let version = OutputVersion::from_query(query.v.as_deref());

    let raw = match cached_bans(&state, &steam_id).await {
        Some(raw) => {
            debug!("Cache hit for {}", steam_id);
            raw
        }
        None => {
            debug!("Cache miss for {}", steam_id);
            let raw = state.steam.fetch_player_bans(&steam_id).await?;
            store_bans(&state, &steam_id, &raw).await;
            raw
        }
    };

    let body = format_output(&raw, version)?;
    info!("Served {} ({:?})", steam_id, version);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

/// 读取缓存，读取失败按未命中处理
async fn cached_bans(state: &AppState, steam_id: &SteamId) -> Option<String> {
    let key = ban_key(&state.config.cache_prefix, steam_id.as_str());
    match state.cache.get(&key).await {
        Ok(Some(raw)) if !raw.is_empty() => Some(raw),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to read cache for {}: {}", steam_id, e);
            None
        }
    }
}

/// 写入缓存，写入失败只记录日志
async fn store_bans(state: &AppState, steam_id: &SteamId, raw: &str) {
    let key = ban_key(&state.config.cache_prefix, steam_id.as_str());
    if let Err(e) = state
        .cache
        .set(&key, raw, state.config.cache_ttl().as_secs())
        .await
    {
        warn!("Failed to cache bans for {}: {}", steam_id, e);
    }
}
