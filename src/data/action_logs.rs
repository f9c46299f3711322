use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Routing configuration for moderation action logs.
///
/// The channel id is stored as a string to match the format other consumers
/// of the file expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionLogConfig {
    action_logs_channel: String,
}

/// File-backed storage for the action-logs channel id.
pub struct ActionLogConfigRepository {
    path: PathBuf,
}

impl ActionLogConfigRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the configured channel id, or `None` when the file is absent
    /// or holds something other than a channel id.
    ///
    /// This bot only writes the blob; the action-logging collaborator that
    /// consumes it lives in a separate process. The read side exists to
    /// state that reader's contract, and the tests pin the wire format
    /// through it.
    pub fn get_channel(&self) -> Result<Option<u64>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let config: ActionLogConfig = serde_json::from_str(&contents)?;
        Ok(config.action_logs_channel.parse::<u64>().ok())
    }

    pub fn set_channel(&self, channel_id: u64) -> Result<(), AppError> {
        let config = ActionLogConfig {
            action_logs_channel: channel_id.to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&config)?)?;
        Ok(())
    }
}
