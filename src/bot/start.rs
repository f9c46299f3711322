use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Initializes the Discord client without connecting.
///
/// Returns the client together with a clone of its HTTP handle so other
/// tasks (the rank tracker) can send messages through the same client.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and state paths
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Initialized client and shared HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        config.nuke_state_path.clone(),
        config.action_logs_path.clone(),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the bot's gateway connection.
///
/// Blocks until the client shuts down, so callers normally spawn this in its
/// own task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
