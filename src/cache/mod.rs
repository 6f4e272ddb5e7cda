// 缓存模块
// 保存上游返回的原始封禁数据，按 17 位 ID 加前缀作为键

pub mod keys;
pub mod operations;

// 重新导出常用类型，方便其他模块使用
pub use operations::{BanCache, MemoryBanCache, RedisBanCache};
