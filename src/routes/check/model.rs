use std::fmt;
use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// 17 位 ASCII 数字，整串匹配
static STEAM_ID_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{17}$").expect("Invalid steam id regex"));

/// 十进制整数：可带符号，不允许前导零
static INT_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?(0|[1-9][0-9]*)$").expect("Invalid integer regex"));

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckQuery {
    pub s: Option<String>,
    pub v: Option<String>,
}

impl CheckQuery {
    /// 从查询参数键值对构建，重复的键取最后一个值
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = CheckQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "s" => query.s = Some(value),
                "v" => query.v = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// 已校验的 17 位 SteamID64
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamId {
    raw: String,
    value: u64,
}

impl SteamId {
    pub fn parse(input: &str) -> Option<Self> {
        if !STEAM_ID_REGEX.is_match(input) {
            return None;
        }
        let value = input.parse::<u64>().ok()?;
        Some(Self {
            raw: input.to_string(),
            value,
        })
    }

    /// 原始 17 位文本，用于缓存键
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 数值形式，用于上游请求参数
    pub fn as_u64(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 输出格式，只有 `v=1` 选择紧凑格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputVersion {
    Raw,
    Compact,
}

impl OutputVersion {
    pub fn from_query(v: Option<&str>) -> Self {
        let Some(v) = v else {
            return OutputVersion::Raw;
        };
        let v = v.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\0'));
        if !INT_REGEX.is_match(v) {
            return OutputVersion::Raw;
        }
        match v.parse::<i64>() {
            Ok(1) => OutputVersion::Compact,
            _ => OutputVersion::Raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomyBan {
    None,
    Probation,
    Banned,
}

impl EconomyBan {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("probation") => EconomyBan::Probation,
            Some("banned") => EconomyBan::Banned,
            _ => EconomyBan::None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            EconomyBan::None => 0,
            EconomyBan::Probation => 1,
            EconomyBan::Banned => 2,
        }
    }
}

/// `players` 数组中的单个玩家记录
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlayerBans {
    #[serde(rename = "NumberOfVACBans")]
    pub number_of_vac_bans: u64,
    #[serde(rename = "DaysSinceLastBan")]
    pub days_since_last_ban: u64,
    #[serde(rename = "NumberOfGameBans")]
    pub number_of_game_bans: u64,
    #[serde(rename = "CommunityBanned")]
    pub community_banned: bool,
    #[serde(rename = "EconomyBan")]
    pub economy_ban: Option<String>,
}

/// 紧凑格式：`vac,days,gamebans,community,econ`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanSummary {
    pub vac_bans: u64,
    pub days_since_last_ban: u64,
    pub game_bans: u64,
    pub community_banned: bool,
    pub economy_ban: EconomyBan,
}

impl From<PlayerBans> for BanSummary {
    fn from(player: PlayerBans) -> Self {
        Self {
            vac_bans: player.number_of_vac_bans,
            days_since_last_ban: player.days_since_last_ban,
            game_bans: player.number_of_game_bans,
            community_banned: player.community_banned,
            economy_ban: EconomyBan::from_status(player.economy_ban.as_deref()),
        }
    }
}

impl fmt::Display for BanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.vac_bans,
            self.days_since_last_ban,
            self.game_bans,
            u8::from(self.community_banned),
            self.economy_ban.code()
        )
    }
}

/// 按输出格式转换原始响应体
///
/// 原始格式直接返回；紧凑格式取 `players` 的第一个元素，解析失败或数组为空时返回
/// [`AppError::PlayerNotFound`]。
pub fn format_output(raw: &str, version: OutputVersion) -> Result<String, AppError> {
    if version == OutputVersion::Raw {
        return Ok(raw.to_string());
    }

    let document: Value = serde_json::from_str(raw).map_err(|_| AppError::PlayerNotFound)?;
    let first = document
        .get("players")
        .and_then(Value::as_array)
        .and_then(|players| players.first())
        .ok_or(AppError::PlayerNotFound)?;
    let player = PlayerBans::deserialize(first).map_err(|_| AppError::PlayerNotFound)?;

    Ok(BanSummary::from(player).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"players":[{"NumberOfVACBans":2,"DaysSinceLastBan":15,"NumberOfGameBans":1,"CommunityBanned":true,"EconomyBan":"none"}]}"#;

    #[test]
    fn steam_id_accepts_exactly_17_digits() {
        let id = SteamId::parse("76561197960287930").unwrap();
        assert_eq!(id.as_str(), "76561197960287930");
        assert_eq!(id.as_u64(), 76561197960287930);
        assert_eq!(id.to_string(), "76561197960287930");
    }

    #[test]
    fn steam_id_rejects_everything_else() {
        for input in [
            "",
            "7656119796028793",
            "765611979602879301",
            "7656119796028793a",
            "+7656119796028793",
            " 76561197960287930",
            "76561197960287930 ",
            "76561197960287930\n",
            "7656119796-287930",
            "٧٦٥٦١١٩٧٩٦٠٢٨٧٩٣٠",
        ] {
            assert!(SteamId::parse(input).is_none(), "accepted {:?}", input);
        }
    }

    #[test]
    fn repeated_query_keys_keep_last_value() {
        let pairs = [
            ("s", "abc"),
            ("v", "0"),
            ("x", "ignored"),
            ("s", "76561197960287930"),
            ("v", "1"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));
        assert_eq!(
            CheckQuery::from_pairs(pairs),
            CheckQuery {
                s: Some("76561197960287930".to_string()),
                v: Some("1".to_string()),
            }
        );
        assert_eq!(CheckQuery::from_pairs(Vec::new()), CheckQuery::default());
    }

    #[test]
    fn output_version_only_one_is_compact() {
        assert_eq!(OutputVersion::from_query(Some("1")), OutputVersion::Compact);
        assert_eq!(OutputVersion::from_query(Some(" 1 ")), OutputVersion::Compact);
        assert_eq!(OutputVersion::from_query(Some("+1")), OutputVersion::Compact);
        for v in ["0", "2", "-1", "01", "1.0", "one", ""] {
            assert_eq!(OutputVersion::from_query(Some(v)), OutputVersion::Raw, "{:?}", v);
        }
        assert_eq!(OutputVersion::from_query(None), OutputVersion::Raw);
    }

    #[test]
    fn economy_ban_mapping_is_total() {
        assert_eq!(EconomyBan::from_status(Some("probation")).code(), 1);
        assert_eq!(EconomyBan::from_status(Some("banned")).code(), 2);
        assert_eq!(EconomyBan::from_status(Some("none")).code(), 0);
        assert_eq!(EconomyBan::from_status(Some("Banned")).code(), 0);
        assert_eq!(EconomyBan::from_status(Some("")).code(), 0);
        assert_eq!(EconomyBan::from_status(None).code(), 0);
    }

    #[test]
    fn compact_output_has_five_fields_in_order() {
        assert_eq!(format_output(BODY, OutputVersion::Compact).unwrap(), "2,15,1,1,0");
    }

    #[test]
    fn compact_output_uses_first_player_only() {
        let body = r#"{"players":[
            {"NumberOfVACBans":0,"DaysSinceLastBan":0,"NumberOfGameBans":3,"CommunityBanned":false,"EconomyBan":"probation"},
            {"NumberOfVACBans":9,"DaysSinceLastBan":9,"NumberOfGameBans":9,"CommunityBanned":true,"EconomyBan":"banned"}
        ]}"#;
        assert_eq!(format_output(body, OutputVersion::Compact).unwrap(), "0,0,3,0,1");
    }

    #[test]
    fn compact_output_defaults_missing_fields_to_zero() {
        let body = r#"{"players":[{"EconomyBan":"banned"}]}"#;
        assert_eq!(format_output(body, OutputVersion::Compact).unwrap(), "0,0,0,0,2");
    }

    #[test]
    fn compact_output_rejects_non_object_first_player() {
        for body in [
            r#"{"players":[null]}"#,
            r#"{"players":["76561197960287930"]}"#,
            r#"{"players":[{"NumberOfVACBans":"2"}]}"#,
        ] {
            assert_eq!(
                format_output(body, OutputVersion::Compact),
                Err(AppError::PlayerNotFound),
                "{:?}",
                body
            );
        }
    }

    #[test]
    fn raw_output_is_unmodified() {
        assert_eq!(format_output(BODY, OutputVersion::Raw).unwrap(), BODY);
        assert_eq!(format_output("not json", OutputVersion::Raw).unwrap(), "not json");
    }

    #[test]
    fn compact_output_rejects_missing_or_empty_players() {
        for body in [
            r#"{"players":[]}"#,
            r#"{"players":{}}"#,
            r#"{}"#,
            r#"[]"#,
            "not json",
            "",
        ] {
            assert_eq!(
                format_output(body, OutputVersion::Compact),
                Err(AppError::PlayerNotFound),
                "{:?}",
                body
            );
        }
    }
}
