/// 缓存操作
/// 提供封禁数据缓存的读写接口及其实现
use async_trait::async_trait;

mod memory;
mod redis_store;

pub use memory::MemoryBanCache;
pub use redis_store::RedisBanCache;

/// 封禁数据缓存
///
/// 只需要按完整键读取和带过期时间写入，写入无条件覆盖旧值。
#[async_trait]
pub trait BanCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError>;

    async fn set(&self, key: &str, body: &str, ttl_secs: u64) -> Result<(), redis::RedisError>;
}
