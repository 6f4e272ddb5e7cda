use std::env;
use std::time::Duration;

/// Steam 封禁查询接口默认地址
pub const DEFAULT_STEAM_API_URL: &str = "http://api.steampowered.com/ISteamUser/GetPlayerBans/v1/";
/// 缓存键默认前缀
pub const DEFAULT_CACHE_PREFIX: &str = "vacbans2_";
/// 缓存默认过期时间，单位秒
pub const DEFAULT_CACHE_TTL_SECS: u64 = 1800;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub steam_api_key: String,
    pub steam_api_url: String,
    pub redis_url: String,
    pub cache_prefix: String,
    pub cache_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub check_path: String,
}

impl Config {
    pub fn new(
        steam_api_key: impl Into<String>,
        steam_api_url: impl Into<String>,
        redis_url: impl Into<String>,
    ) -> Self {
        Config {
            steam_api_key: steam_api_key.into(),
            steam_api_url: steam_api_url.into(),
            redis_url: redis_url.into(),
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            check_path: "/check".to_string(),
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let cache_ttl = env::var("CACHE_TTL")
            .ok()
            .and_then(|v| v.trim_end_matches('s').parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let mut config = Config::new(
            env::var("STEAM_API_KEY")?,
            env::var("STEAM_API_URL").unwrap_or_else(|_| DEFAULT_STEAM_API_URL.into()),
            env::var("REDIS_URL")?,
        );
        config.cache_ttl_secs = cache_ttl;
        if let Ok(prefix) = env::var("CACHE_PREFIX") {
            config.cache_prefix = prefix;
        }
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()) {
            config.server_port = port;
        }
        if let Ok(path) = env::var("CHECK_PATH") {
            config.check_path = path;
        }

        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
