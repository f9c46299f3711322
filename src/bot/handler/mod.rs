use std::path::PathBuf;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Backing file for the nuking feature flag.
    pub nuke_state_path: PathBuf,
    /// Backing file for the action-logs channel routing.
    pub action_logs_path: PathBuf,
}

impl Handler {
    pub fn new(nuke_state_path: PathBuf, action_logs_path: PathBuf) -> Self {
        Self {
            nuke_state_path,
            action_logs_path,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a slash command (or other interaction) is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
