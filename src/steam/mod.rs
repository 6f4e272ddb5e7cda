// Steam 封禁查询上游
mod client;

pub use client::SteamClient;
