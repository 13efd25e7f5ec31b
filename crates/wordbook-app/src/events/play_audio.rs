use std::sync::Arc;

use wordbook_api::DictionaryApi;
use wordbook_audio::AudioPlayer;

/// Fetch pronunciation bytes and hand them to the shared player. Failures
/// are logged only; audio is never worth interrupting the session for.
pub fn handle_play_audio(url: &str, provider: &Arc<dyn DictionaryApi>, audio: &AudioPlayer) {
    let provider = Arc::clone(provider);
    let player = audio.clone();
    let url = url.to_string();

    tokio::spawn(async move {
        match provider.fetch_audio(&url).await {
            Ok(bytes) => {
                if let Err(e) = player.play(bytes).await {
                    tracing::warn!(error = %e, "audio playback failed");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, url, "failed to fetch pronunciation audio");
            }
        }
    });
}
