use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordbook_api::DictionaryApi;
use wordbook_audio::AudioPlayer;
use wordbook_core::search::SearchLifecycle;
use wordbook_types::AppEvent;

use crate::state::AppState;

pub mod play_audio;
pub mod search;

use play_audio::handle_play_audio;
use search::{handle_search, handle_search_resolved};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    provider: Arc<dyn DictionaryApi>,
    audio: AudioPlayer,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lifecycle = SearchLifecycle::new();

    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(event = ?std::mem::discriminant(&event), "event received");
        match event {
            AppEvent::Search { term } => {
                handle_search(&mut lifecycle, &term, &provider, &app_to_ui_tx, &loopback_tx)
                    .await?;
            }
            AppEvent::SearchResolved { seq, outcome } => {
                handle_search_resolved(&mut lifecycle, seq, outcome, &app_to_ui_tx).await?;
            }
            AppEvent::PlayAudio { url } => {
                let enabled = state.config.read().await.audio.enabled;
                if enabled {
                    handle_play_audio(&url, &provider, &audio);
                } else {
                    tracing::debug!("audio disabled, ignoring play request");
                }
            }
            AppEvent::Close => break,
            other => {
                // UI-bound events have no business on this channel
                tracing::trace!(?other, "ignoring event");
            }
        }
    }

    tracing::info!("event loop stopped");
    Ok(())
}
