//! Factory for group audit-log wire payloads.
//!
//! Builds audit-log entries and pages as JSON values with the exact casing
//! the group API uses: a camelCase envelope around a PascalCase description
//! object. Defaults describe a valid `ChangeRank` record so most tests only
//! override the fields they care about.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for creating test audit-log entries with customizable fields.
///
/// Defaults:
/// - action type: `"ChangeRank"`
/// - target: auto-incremented id, name `"Target {id}"`
/// - actor: auto-incremented id, name `"Actor {id}"`
/// - roles: `(5, "Recruit")` -> `(9, "Officer")`
/// - created: `2024-03-01T12:00:00Z`
pub struct AuditLogEntryFactory {
    action_type: Option<String>,
    actor: Option<(u64, String)>,
    target_id: Option<u64>,
    target_name: Option<String>,
    old_role: Option<(i64, Option<String>)>,
    new_role: Option<(i64, Option<String>)>,
    created: Option<DateTime<Utc>>,
    include_description: bool,
}

impl AuditLogEntryFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            action_type: Some("ChangeRank".to_string()),
            actor: Some((10_000 + id, format!("Actor {}", id))),
            target_id: Some(id),
            target_name: Some(format!("Target {}", id)),
            old_role: Some((5, Some("Recruit".to_string()))),
            new_role: Some((9, Some("Officer".to_string()))),
            created: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            include_description: true,
        }
    }

    pub fn action_type(mut self, action_type: &str) -> Self {
        self.action_type = Some(action_type.to_string());
        self
    }

    pub fn actor(mut self, user_id: u64, username: &str) -> Self {
        self.actor = Some((user_id, username.to_string()));
        self
    }

    pub fn target(mut self, target_id: u64, target_name: &str) -> Self {
        self.target_id = Some(target_id);
        self.target_name = Some(target_name.to_string());
        self
    }

    pub fn old_role(mut self, role_set_id: i64, name: &str) -> Self {
        self.old_role = Some((role_set_id, Some(name.to_string())));
        self
    }

    pub fn new_role(mut self, role_set_id: i64, name: &str) -> Self {
        self.new_role = Some((role_set_id, Some(name.to_string())));
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Drops the actor object entirely.
    pub fn without_actor(mut self) -> Self {
        self.actor = None;
        self
    }

    /// Drops the description object entirely.
    pub fn without_description(mut self) -> Self {
        self.include_description = false;
        self
    }

    /// Keeps the description but drops `TargetId`.
    pub fn without_target_id(mut self) -> Self {
        self.target_id = None;
        self
    }

    /// Drops the `created` timestamp.
    pub fn without_created(mut self) -> Self {
        self.created = None;
        self
    }

    /// Keeps the role-set ids but drops both role names.
    pub fn without_role_names(mut self) -> Self {
        self.old_role = self.old_role.map(|(id, _)| (id, None));
        self.new_role = self.new_role.map(|(id, _)| (id, None));
        self
    }

    /// Builds the entry as the JSON the audit-log endpoint would return.
    pub fn build(self) -> Value {
        let mut entry = json!({});

        if let Some((user_id, username)) = &self.actor {
            entry["actor"] = json!({
                "user": {
                    "userId": user_id,
                    "username": username,
                }
            });
        }

        if let Some(action_type) = &self.action_type {
            entry["actionType"] = json!(action_type);
        }

        if self.include_description {
            let mut description = json!({});
            if let Some(target_id) = self.target_id {
                description["TargetId"] = json!(target_id);
            }
            if let Some(target_name) = &self.target_name {
                description["TargetName"] = json!(target_name);
            }
            if let Some((id, name)) = &self.old_role {
                description["OldRoleSetId"] = json!(id);
                if let Some(name) = name {
                    description["OldRoleSetName"] = json!(name);
                }
            }
            if let Some((id, name)) = &self.new_role {
                description["NewRoleSetId"] = json!(id);
                if let Some(name) = name {
                    description["NewRoleSetName"] = json!(name);
                }
            }
            entry["description"] = description;
        }

        if let Some(created) = self.created {
            entry["created"] = json!(created.to_rfc3339());
        }

        entry
    }
}

impl Default for AuditLogEntryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one page of the audit log around the given entries.
///
/// # Arguments
/// - `entries` - Entries in arrival order, from [`AuditLogEntryFactory`]
/// - `next_cursor` - Continuation token, `None` for the final page
pub fn page(entries: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": entries,
        "nextPageCursor": next_cursor,
    })
}
