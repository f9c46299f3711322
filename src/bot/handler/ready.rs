//! Ready event handler for bot initialization.
//!
//! Fires once the bot completes the gateway handshake. Used to log the
//! connection and register the global slash commands; registration is
//! idempotent, so re-running it on reconnect is harmless.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the group audit log")));

    for builder in [command::nuking::register(), command::set_action_logs::register()] {
        if let Err(e) = Command::create_global_command(&ctx.http, builder).await {
            tracing::error!("Failed to register slash command: {}", e);
        }
    }
}
