use chrono::{DateTime, Utc};

/// Direction of a rank change, inferred from the rank ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    Promotion,
    Demotion,
}

/// A typed domain event derived from one audit-log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEvent {
    /// A member was moved to a different rank.
    RankChange {
        target_id: u64,
        target_name: String,
        old_rank: String,
        new_rank: String,
        direction: RankDirection,
        actor: String,
        actor_id: u64,
        occurred_at: DateTime<Utc>,
    },
    /// A member was removed from the group (exiled).
    Removal {
        target_id: u64,
        target_name: String,
        actor: String,
        actor_id: u64,
        occurred_at: DateTime<Utc>,
    },
}

impl GroupEvent {
    pub fn target_id(&self) -> u64 {
        match self {
            Self::RankChange { target_id, .. } | Self::Removal { target_id, .. } => *target_id,
        }
    }

    pub fn target_name(&self) -> &str {
        match self {
            Self::RankChange { target_name, .. } | Self::Removal { target_name, .. } => target_name,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::RankChange { occurred_at, .. } | Self::Removal { occurred_at, .. } => {
                *occurred_at
            }
        }
    }

    /// Deterministic deduplication key for this event.
    ///
    /// Two records with equal `(TargetId, created)` are indistinguishable and
    /// collapse to one identity; the key is the dedup granularity, not the
    /// full record content.
    pub fn identity(&self) -> String {
        format!("{}-{}", self.target_id(), self.occurred_at().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Tests that the dedup identity is derived from target id and timestamp.
    ///
    /// Expected: `"<target_id>-<created as epoch millis>"`
    #[test]
    fn identity_combines_target_and_millis() {
        let occurred_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let event = GroupEvent::Removal {
            target_id: 42,
            target_name: "Subject".to_string(),
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at,
        };

        assert_eq!(
            event.identity(),
            format!("42-{}", occurred_at.timestamp_millis())
        );
    }

    /// Tests that rank-change and removal events with the same target and
    /// timestamp collapse to the same identity.
    ///
    /// Expected: identical identity strings
    #[test]
    fn identity_ignores_event_content() {
        let occurred_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let removal = GroupEvent::Removal {
            target_id: 42,
            target_name: "Subject".to_string(),
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at,
        };
        let rank_change = GroupEvent::RankChange {
            target_id: 42,
            target_name: "Subject".to_string(),
            old_rank: "Recruit".to_string(),
            new_rank: "Officer".to_string(),
            direction: RankDirection::Promotion,
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at,
        };

        assert_eq!(removal.identity(), rank_change.identity());
    }
}
