mod handler;
mod model;

pub use handler::check_bans;
pub use model::{
    BanSummary, CheckQuery, EconomyBan, OutputVersion, PlayerBans, SteamId, format_output,
};
