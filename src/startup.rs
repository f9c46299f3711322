use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Filter level comes from `RUST_LOG`, defaulting to `info` when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Creates the shared reqwest client used for all external API calls.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}
