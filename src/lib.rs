use std::sync::Arc;

use axum::{Router, routing::get};
use cache::BanCache;
use config::Config;
use steam::SteamClient;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod steam;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<dyn BanCache>,
    pub steam: SteamClient,
}

impl AppState {
    pub fn new(config: Config, cache: Arc<dyn BanCache>) -> Self {
        let steam = SteamClient::from_config(&config);
        Self {
            config,
            cache,
            steam,
        }
    }
}

/// 创建主路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(&state.config.check_path, get(routes::check::check_bans))
        .route("/ping", get(routes::health::ping))
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(state)
}
