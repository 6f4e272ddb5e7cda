/// 生成封禁数据缓存键：`<前缀><17位ID>`
pub fn ban_key(prefix: &str, steam_id: &str) -> String {
    format!("{}{}", prefix, steam_id)
}
