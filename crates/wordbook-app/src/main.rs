use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use wordbook_api::{DictApiClient, DictionaryApi};
use wordbook_audio::AudioPlayer;
use wordbook_config::Config;

mod controller;
mod events;
mod state;
mod ui;


use crate::controller::AppController;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::new();
    init_tracing(&config)?;

    let timeout = Duration::from_secs(config.network.timeout_seconds);
    let provider: Arc<dyn DictionaryApi> =
        Arc::new(DictApiClient::new(config.network.api_url.clone(), timeout)?);
    let audio = AudioPlayer::spawn(config.audio.volume)?;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(provider, audio);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => match result {
            Some(Ok(Ok(()))) => tracing::info!("task finished"),
            Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
            Some(Err(e)) => tracing::error!("task panicked: {e}"),
            None => {}
        },
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if atty::is(atty::Stream::Stderr) {
        // The terminal belongs to the TUI; keep logs in a file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
