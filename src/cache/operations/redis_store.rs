use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::BanCache;

/// 基于 Redis 的封禁数据缓存
#[derive(Clone)]
pub struct RedisBanCache {
    redis: Arc<RedisClient>,
}

impl RedisBanCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl BanCache for RedisBanCache {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(key).await?;
        Ok(result)
    }

    async fn set(&self, key: &str, body: &str, ttl_secs: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.set_ex(key, body, ttl_secs).await?;

        Ok(())
    }
}
