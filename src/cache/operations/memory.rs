use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::BanCache;

/// 进程内缓存，用于测试
#[derive(Default)]
pub struct MemoryBanCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryBanCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BanCache for MemoryBanCache {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some((body, expires_at)) if Instant::now() < *expires_at => Ok(Some(body.clone())),
            Some(_) => {
                // 已过期
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, body: &str, ttl_secs: u64) -> Result<(), redis::RedisError> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (body.to_string(), expires_at));
        Ok(())
    }
}
