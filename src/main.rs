mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use tokio::sync::watch;

use crate::config::Config;
use crate::data::FileSeenStore;
use crate::error::AppError;
use crate::service::roblox::RobloxClient;
use crate::service::tracker::{DiscordNotifier, RankTracker};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client();

    tracing::info!("Starting groupwatch");

    // Initialize Discord bot and extract its HTTP client for the tracker
    let (bot_client, discord_http) = bot::start::init_bot(&config).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Wire up the rank tracker: audit-log source, durable seen-set, Discord sink
    let source = RobloxClient::new(
        http_client.clone(),
        config.roblox_cookie.clone(),
        config.roblox_group_id,
    );
    let thumbnails = RobloxClient::new(
        http_client,
        config.roblox_cookie.clone(),
        config.roblox_group_id,
    );
    let seen = FileSeenStore::open(&config.seen_log_path)?;
    let notifier = DiscordNotifier::new(discord_http, config.rank_log_channel_id, thumbnails);
    let tracker = RankTracker::new(source, seen, notifier, config.poll_interval);

    let tracker_handle = tokio::spawn(tracker.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    // Let the tracker finish cleanly before tearing down the gateway
    let _ = shutdown_tx.send(true);
    let _ = tracker_handle.await;
    shard_manager.shutdown_all().await;

    Ok(())
}
