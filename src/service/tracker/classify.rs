//! Classification of raw audit records into domain events.

use std::fmt;

use crate::model::audit::AuditLogEntry;
use crate::model::event::{GroupEvent, RankDirection};

/// Why a record was dropped instead of classified.
///
/// Discards are per-record: they are logged by the poll loop and never affect
/// sibling records in the same page. A record discarded for a missing
/// identity field never reaches the dedup store, and since the source will
/// not re-emit it at a later cursor it is lost for good; the warn log is the
/// only trace of it.
#[derive(Debug, PartialEq, Eq)]
pub enum Discard {
    MissingActor,
    MissingDescription,
    /// `TargetId` or `created` is absent, so no dedup identity can be built.
    MissingIdentity,
    MissingAction,
    UnrecognizedAction(String),
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingActor => write!(f, "record is missing its actor"),
            Self::MissingDescription => write!(f, "record is missing its description"),
            Self::MissingIdentity => {
                write!(f, "record is missing its target id or timestamp")
            }
            Self::MissingAction => write!(f, "record is missing its action type"),
            Self::UnrecognizedAction(action) => {
                write!(f, "unrecognized action type '{action}'")
            }
        }
    }
}

/// Maps a raw audit-log record to a typed domain event.
///
/// `ChangeRank` records become [`GroupEvent::RankChange`], `Exile` records
/// become [`GroupEvent::Removal`], everything else is discarded. Rank names
/// missing on the wire render as `"Unknown"`.
pub fn classify(entry: &AuditLogEntry) -> Result<GroupEvent, Discard> {
    let actor = entry.actor.as_ref().ok_or(Discard::MissingActor)?;
    let description = entry.description.as_ref().ok_or(Discard::MissingDescription)?;

    let (Some(target_id), Some(occurred_at)) = (description.target_id, entry.created) else {
        return Err(Discard::MissingIdentity);
    };

    let target_name = description
        .target_name
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    match entry.action_type.as_deref() {
        Some("ChangeRank") => {
            // A rank move is only a promotion when the new ordinal strictly
            // exceeds the old one; equal or missing ordinals count as
            // demotions.
            let direction = match (description.new_role_set_id, description.old_role_set_id) {
                (Some(new), Some(old)) if new > old => RankDirection::Promotion,
                _ => RankDirection::Demotion,
            };

            Ok(GroupEvent::RankChange {
                target_id,
                target_name,
                old_rank: description
                    .old_role_set_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                new_rank: description
                    .new_role_set_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                direction,
                actor: actor.user.username.clone(),
                actor_id: actor.user.user_id,
                occurred_at,
            })
        }
        Some("Exile") => Ok(GroupEvent::Removal {
            target_id,
            target_name,
            actor: actor.user.username.clone(),
            actor_id: actor.user.user_id,
            occurred_at,
        }),
        Some(other) => Err(Discard::UnrecognizedAction(other.to_string())),
        None => Err(Discard::MissingAction),
    }
}
