use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of the group audit log.
///
/// `next_page_cursor` is an opaque continuation token; `None` means the end of
/// the currently-available audit window.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogPage {
    pub data: Vec<AuditLogEntry>,
    pub next_page_cursor: Option<String>,
}

/// A raw audit-log record as returned by the group API.
///
/// Every field the classifier depends on is optional on the wire; records with
/// missing pieces are discarded individually rather than failing the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub actor: Option<Actor>,
    pub action_type: Option<String>,
    pub description: Option<ActionDescription>,
    pub created: Option<DateTime<Utc>>,
}

/// The group member who performed the audited action.
#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub user: ActorUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorUser {
    pub user_id: u64,
    pub username: String,
}

/// Action payload of an audit record.
///
/// The group API uses PascalCase keys for this object, unlike the camelCase
/// envelope around it. Role-set ids are the rank ordinals used to tell
/// promotions from demotions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionDescription {
    pub target_id: Option<u64>,
    pub target_name: Option<String>,
    pub old_role_set_id: Option<i64>,
    pub old_role_set_name: Option<String>,
    pub new_role_set_id: Option<i64>,
    pub new_role_set_name: Option<String>,
}
