//! Slash-command surface for server configuration.
//!
//! Each command module exposes its name, a `register()` builder for global
//! registration, and a `run()` handler. Commands reply with ephemeral embeds
//! so configuration chatter stays out of the channel.

pub mod nuking;
pub mod set_action_logs;

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub(crate) const SUCCESS_COLOR: u32 = 0x00ff00;
pub(crate) const ERROR_COLOR: u32 = 0xff0000;

/// Replies to an interaction with a single ephemeral embed.
pub(crate) async fn respond_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
