use std::sync::Arc;

use kanal::AsyncSender;
use wordbook_api::DictionaryApi;
use wordbook_core::search::{Resolution, SearchLifecycle, SearchState};
use wordbook_types::{AppEvent, Entry, SearchError};

/// Validate and issue a lookup. The request runs on its own task so the
/// loop keeps handling events while it is outstanding; the outcome comes
/// back as [`AppEvent::SearchResolved`] tagged with the sequence number.
pub async fn handle_search(
    lifecycle: &mut SearchLifecycle,
    raw_term: &str,
    provider: &Arc<dyn DictionaryApi>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    loopback_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let pending = match lifecycle.submit(raw_term) {
        Ok(pending) => pending,
        Err(err) => {
            // Input errors never reach the network
            app_to_ui_tx.send(AppEvent::ShowError(err.to_string())).await?;
            return Ok(());
        }
    };

    app_to_ui_tx
        .send(AppEvent::ShowLoading {
            term: pending.term.clone(),
        })
        .await?;

    let provider = Arc::clone(provider);
    let tx = loopback_tx.clone();
    tokio::spawn(async move {
        let outcome: Result<Entry, SearchError> = provider
            .lookup(&pending.term)
            .await
            .map_err(SearchError::from);

        if tx
            .send(AppEvent::SearchResolved {
                seq: pending.seq,
                outcome,
            })
            .await
            .is_err()
        {
            tracing::warn!(term = %pending.term, "event loop gone before lookup resolved");
        }
    });

    Ok(())
}

pub async fn handle_search_resolved(
    lifecycle: &mut SearchLifecycle,
    seq: u64,
    outcome: Result<Entry, SearchError>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match lifecycle.resolve(seq, outcome) {
        Resolution::Stale => {
            tracing::debug!(seq, "discarding stale lookup result");
        }
        Resolution::Applied => match lifecycle.state() {
            SearchState::Loaded(view) => {
                app_to_ui_tx.send(AppEvent::ShowEntry(view.clone())).await?;
            }
            SearchState::Failed(err) => {
                app_to_ui_tx.send(AppEvent::ShowError(err.to_string())).await?;
            }
            state => {
                tracing::warn!(?state, "resolution applied to a non-terminal state");
            }
        },
    }

    Ok(())
}
