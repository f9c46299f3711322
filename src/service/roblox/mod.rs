//! Client for the Roblox group and thumbnail APIs.
//!
//! One `RobloxClient` is shared by the tracker: the audit-log fetch in `audit`
//! is the event source the poll loop drains, and the avatar lookup in `avatar`
//! is a best-effort decoration for notifications.

pub mod audit;
pub mod avatar;

use std::time::Duration;

pub use audit::AuditLogSource;

const GROUPS_API_BASE: &str = "https://groups.roblox.com";
const THUMBNAILS_API_BASE: &str = "https://thumbnails.roblox.com";

/// First backoff delay for transient audit-log failures; doubles per retry.
const BACKOFF_BASE: Duration = Duration::from_secs(1);

pub struct RobloxClient {
    http: reqwest::Client,
    api_base: String,
    thumb_base: String,
    /// `.ROBLOSECURITY` cookie value.
    cookie: String,
    group_id: u64,
    backoff_base: Duration,
}

impl RobloxClient {
    pub fn new(http: reqwest::Client, cookie: String, group_id: u64) -> Self {
        Self {
            http,
            api_base: GROUPS_API_BASE.to_string(),
            thumb_base: THUMBNAILS_API_BASE.to_string(),
            cookie,
            group_id,
            backoff_base: BACKOFF_BASE,
        }
    }
}
