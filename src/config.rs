use std::path::PathBuf;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// Seconds to wait between poll cycles when `POLL_INTERVAL_SECS` is not set.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default locations of the durable state files, relative to the working
/// directory.
const DEFAULT_SEEN_LOG_PATH: &str = "processed_logs.json";
const DEFAULT_NUKE_STATE_PATH: &str = "nuke_state.json";
const DEFAULT_ACTION_LOGS_PATH: &str = "actionlogs.json";

pub struct Config {
    pub discord_bot_token: String,

    /// `.ROBLOSECURITY` cookie used to authenticate against the group API.
    pub roblox_cookie: String,
    /// Roblox group whose audit log is tracked.
    pub roblox_group_id: u64,
    /// Discord channel that receives rank-change notifications.
    pub rank_log_channel_id: u64,

    pub poll_interval: Duration,

    pub seen_log_path: PathBuf,
    pub nuke_state_path: PathBuf,
    pub action_logs_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            roblox_cookie: require("ROBLOX_COOKIE")?,
            roblox_group_id: require_u64("ROBLOX_GROUP_ID")?,
            rank_log_channel_id: require_u64("RANK_LOG_CHANNEL_ID")?,
            poll_interval: Duration::from_secs(
                optional_u64("POLL_INTERVAL_SECS")?.unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            ),
            seen_log_path: optional_path("SEEN_LOG_PATH", DEFAULT_SEEN_LOG_PATH),
            nuke_state_path: optional_path("NUKE_STATE_PATH", DEFAULT_NUKE_STATE_PATH),
            action_logs_path: optional_path("ACTION_LOGS_PATH", DEFAULT_ACTION_LOGS_PATH),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    let value = require(name)?;
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

fn optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

fn optional_path(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
