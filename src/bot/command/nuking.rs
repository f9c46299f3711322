//! `/nuking enable|disable` - toggles the nuke feature flag.
//!
//! Only the guild owner may flip the flag. This bot only persists the flag;
//! the functionality gated by it lives in an external collaborator that
//! reads the same file.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed,
};

use crate::bot::command::{respond_ephemeral, ERROR_COLOR, SUCCESS_COLOR};
use crate::bot::handler::Handler;
use crate::data::NukeStateRepository;
use crate::error::AppError;

pub const NAME: &str = "nuking";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Enable or disable the nuke functionality")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "enable",
            "Enable nuking on the server",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "disable",
            "Disable nuking on the server",
        ))
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        let embed = CreateEmbed::new()
            .colour(ERROR_COLOR)
            .description("This command can only be used in a server.");
        return respond_ephemeral(ctx, interaction, embed).await;
    };

    // Owner check requires the guild, which interactions don't carry.
    let guild = ctx.http.get_guild(guild_id).await?;
    if guild.owner_id != interaction.user.id {
        let embed = CreateEmbed::new()
            .colour(ERROR_COLOR)
            .title("Permission Denied")
            .description("Only the server owner can enable or disable nuking.");
        return respond_ephemeral(ctx, interaction, embed).await;
    }

    let enable = matches!(
        interaction.data.options.first().map(|o| o.name.as_str()),
        Some("enable")
    );

    let repo = NukeStateRepository::new(&handler.nuke_state_path);
    let mut state = repo.load()?;
    state.nuking_enabled = enable;
    repo.save(&state)?;

    tracing::info!(
        "Nuking {} by {} in guild {}",
        if enable { "enabled" } else { "disabled" },
        interaction.user.name,
        guild_id
    );

    let embed = if enable {
        CreateEmbed::new()
            .colour(SUCCESS_COLOR)
            .title("Nuking Enabled")
            .description("Nuking has been enabled on this server.")
    } else {
        CreateEmbed::new()
            .colour(ERROR_COLOR)
            .title("Nuking Disabled")
            .description("Nuking has been disabled on this server.")
    };

    respond_ephemeral(ctx, interaction, embed).await
}
