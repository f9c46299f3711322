//! Interaction dispatch for slash commands.

use serenity::all::{Context, Interaction};

use crate::bot::command;
use crate::bot::handler::Handler;

/// Routes a command interaction to its handler.
///
/// Unknown commands are ignored; handler errors are logged and never crash
/// the event loop.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let result = match interaction.data.name.as_str() {
        command::nuking::NAME => command::nuking::run(handler, &ctx, &interaction).await,
        command::set_action_logs::NAME => {
            command::set_action_logs::run(handler, &ctx, &interaction).await
        }
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to handle /{} command: {}",
            interaction.data.name,
            e
        );
    }
}
