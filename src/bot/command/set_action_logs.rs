//! `/setactionlogs` - routes moderation action logs to a channel.
//!
//! Requires the Administrator permission. The selected channel id is stored
//! in a small JSON blob read by the action-logging collaborator.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, ResolvedValue,
};

use crate::bot::command::{respond_ephemeral, ERROR_COLOR, SUCCESS_COLOR};
use crate::bot::handler::Handler;
use crate::data::ActionLogConfigRepository;
use crate::error::AppError;

pub const NAME: &str = "setactionlogs";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the channel for action logs")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel to log actions in",
            )
            .required(true),
        )
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let is_admin = interaction
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .map(|p| p.administrator())
        .unwrap_or(false);

    if !is_admin {
        let embed = CreateEmbed::new()
            .colour(ERROR_COLOR)
            .description("You do not have permission to set the action logs channel.");
        return respond_ephemeral(ctx, interaction, embed).await;
    }

    let channel = interaction.data.options().into_iter().find_map(|option| {
        match option.value {
            ResolvedValue::Channel(channel) => Some(channel),
            _ => None,
        }
    });

    let Some(channel) = channel else {
        let embed = CreateEmbed::new()
            .colour(ERROR_COLOR)
            .description("Channel not found. Please ensure the selection is correct.");
        return respond_ephemeral(ctx, interaction, embed).await;
    };

    if channel.kind != ChannelType::Text {
        let embed = CreateEmbed::new()
            .colour(ERROR_COLOR)
            .description("The selected channel is not a text channel. Please pick a text channel.");
        return respond_ephemeral(ctx, interaction, embed).await;
    }

    let repo = ActionLogConfigRepository::new(&handler.action_logs_path);
    let embed = match repo.set_channel(channel.id.get()) {
        Ok(()) => {
            tracing::info!(
                "Action logs channel set to {} by {}",
                channel.id,
                interaction.user.name
            );
            CreateEmbed::new().colour(SUCCESS_COLOR).description(format!(
                "Action logs channel has been set to <#{}>!",
                channel.id
            ))
        }
        Err(e) => {
            tracing::error!("Failed to save action logs channel: {}", e);
            CreateEmbed::new()
                .colour(ERROR_COLOR)
                .description("There was an error saving the channel. Please try again later.")
        }
    };

    respond_ephemeral(ctx, interaction, embed).await
}
