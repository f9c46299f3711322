//! Notification formatting and delivery to Discord.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;
use crate::model::event::{GroupEvent, RankDirection};
use crate::service::roblox::RobloxClient;

/// Thumbnail used when the avatar lookup yields nothing.
const DEFAULT_AVATAR_URL: &str = "https://www.roblox.com/images/default_avatar.png";

const PROMOTION_COLOR: u32 = 0x00ff00;
const DEMOTION_COLOR: u32 = 0xff0000;
const REMOVAL_COLOR: u32 = 0x992d22;

/// Destination for classified events.
///
/// The poll loop depends only on this trait; tests swap in recording or
/// failing sinks to pin the loop's delivery semantics.
#[async_trait]
pub trait EventSink {
    async fn deliver(&self, event: &GroupEvent) -> Result<(), AppError>;
}

/// Delivers events as embeds to a fixed Discord channel.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
    roblox: RobloxClient,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, channel_id: u64, roblox: RobloxClient) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
            roblox,
        }
    }
}

#[async_trait]
impl EventSink for DiscordNotifier {
    /// Sends one embed for the event.
    ///
    /// The avatar lookup is best-effort and substitutes a default image on
    /// failure; the send itself propagates errors to the poll loop, which
    /// logs and swallows them.
    async fn deliver(&self, event: &GroupEvent) -> Result<(), AppError> {
        let avatar_url = self.roblox.avatar_url(event.target_id()).await;
        let embed = build_embed(event, avatar_url);

        self.channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        tracing::info!(
            "Sent notification for {} to channel {}",
            event.target_name(),
            self.channel_id
        );
        Ok(())
    }
}

/// Renders a domain event into an embed.
///
/// Carries the event category, subject identity and display name, before and
/// after rank names where applicable, attribution and a human-readable
/// timestamp.
fn build_embed(event: &GroupEvent, avatar_url: Option<String>) -> CreateEmbed {
    let timestamp = event
        .occurred_at()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    let embed = match event {
        GroupEvent::RankChange {
            target_name,
            old_rank,
            new_rank,
            direction,
            actor,
            actor_id,
            ..
        } => {
            let (color, title, verb) = match direction {
                RankDirection::Promotion => (PROMOTION_COLOR, "Promotion", "promoted"),
                RankDirection::Demotion => (DEMOTION_COLOR, "Demotion", "demoted"),
            };

            CreateEmbed::new()
                .colour(color)
                .title(title)
                .description(format!("{} has been {}.", target_name, verb))
                .field("Previous Rank", old_rank.clone(), true)
                .field("New Rank", new_rank.clone(), true)
                .field(
                    "Action Performed By",
                    format!("{} (Roblox ID: {})", actor, actor_id),
                    true,
                )
                .field("Timestamp", timestamp, true)
        }
        GroupEvent::Removal {
            target_name,
            actor,
            actor_id,
            ..
        } => CreateEmbed::new()
            .colour(REMOVAL_COLOR)
            .title("Removed from Group")
            .description(format!("{} has been removed from the group.", target_name))
            .field(
                "Action Performed By",
                format!("{} (Roblox ID: {})", actor, actor_id),
                true,
            )
            .field("Timestamp", timestamp, true),
    };

    embed
        .thumbnail(avatar_url.unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()))
        .footer(CreateEmbedFooter::new(format!(
            "Roblox ID: {}",
            event.target_id()
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn promotion() -> GroupEvent {
        GroupEvent::RankChange {
            target_id: 42,
            target_name: "Subject".to_string(),
            old_rank: "Recruit".to_string(),
            new_rank: "Officer".to_string(),
            direction: RankDirection::Promotion,
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    /// Tests the promotion embed layout.
    ///
    /// Expected: green color, "Promotion" title, rank fields, attribution
    /// with the actor's id, and the target id in the footer
    #[test]
    fn promotion_embed_layout() {
        let embed = build_embed(&promotion(), Some("https://thumbs/42.png".to_string()));
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "Promotion");
        assert_eq!(json["color"], PROMOTION_COLOR);
        assert_eq!(json["description"], "Subject has been promoted.");
        assert_eq!(json["thumbnail"]["url"], "https://thumbs/42.png");
        assert_eq!(json["footer"]["text"], "Roblox ID: 42");

        let fields = json["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0]["name"], "Previous Rank");
        assert_eq!(fields[0]["value"], "Recruit");
        assert_eq!(fields[1]["name"], "New Rank");
        assert_eq!(fields[1]["value"], "Officer");
        assert_eq!(fields[2]["value"], "Moderator (Roblox ID: 7)");
        assert_eq!(fields[3]["name"], "Timestamp");
        assert_eq!(fields[3]["value"], "2024-03-01 12:30:00 UTC");
    }

    /// Tests the demotion embed variant.
    ///
    /// Expected: red color and "Demotion" title
    #[test]
    fn demotion_embed_variant() {
        let event = GroupEvent::RankChange {
            target_id: 42,
            target_name: "Subject".to_string(),
            old_rank: "Officer".to_string(),
            new_rank: "Recruit".to_string(),
            direction: RankDirection::Demotion,
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(build_embed(&event, None)).unwrap();

        assert_eq!(json["title"], "Demotion");
        assert_eq!(json["color"], DEMOTION_COLOR);
        assert_eq!(json["description"], "Subject has been demoted.");
    }

    /// Tests the removal embed: no rank fields, attribution preserved.
    ///
    /// Expected: "Removed from Group" title and exactly 2 fields
    #[test]
    fn removal_embed_has_no_rank_fields() {
        let event = GroupEvent::Removal {
            target_id: 42,
            target_name: "Subject".to_string(),
            actor: "Moderator".to_string(),
            actor_id: 7,
            occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(build_embed(&event, None)).unwrap();

        assert_eq!(json["title"], "Removed from Group");
        assert_eq!(json["fields"].as_array().unwrap().len(), 2);
    }

    /// Tests the default-avatar substitution when the lookup failed.
    ///
    /// Expected: thumbnail is the default avatar URL
    #[test]
    fn missing_avatar_uses_default() {
        let json = serde_json::to_value(build_embed(&promotion(), None)).unwrap();

        assert_eq!(json["thumbnail"]["url"], DEFAULT_AVATAR_URL);
    }
}
