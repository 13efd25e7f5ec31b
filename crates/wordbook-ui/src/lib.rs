use std::io;
use std::sync::Arc;

use anyhow::Context;
use crossterm::ExecutableCommand;
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use kanal::{AsyncReceiver, AsyncSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::RwLock;
use wordbook_config::Config;
use wordbook_config::ui::UiConfig;
use wordbook_types::AppEvent;

pub mod state;
pub mod view;

use self::state::{UiAction, UiState};

/// Own the terminal for the lifetime of the app: draw the current state,
/// translate key presses into app events, and apply events pushed back by
/// the app loop.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let ui_config = { config.read().await.ui.clone() };

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &ui_config, app_to_ui_rx, &ui_to_app_tx).await;

    // Restore the terminal even when the loop errored.
    disable_raw_mode().ok();
    io::stdout().execute(LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ui_config: &UiConfig,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut state = UiState::new();
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| view::render(frame, &state, ui_config))?;

        tokio::select! {
            terminal_event = events.next() => match terminal_event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = state.handle_key(key) {
                        dispatch(action, ui_to_app_tx).await?;
                    }
                    if state.should_quit {
                        let _ = ui_to_app_tx.send(AppEvent::Close).await;
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("terminal event stream failed"),
                None => return Ok(()),
            },
            app_event = app_to_ui_rx.recv() => match app_event {
                Ok(event) => state.apply_event(event),
                // App loop gone; nothing left to display.
                Err(_) => return Ok(()),
            },
        }
    }
}

async fn dispatch(action: UiAction, ui_to_app_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    match action {
        UiAction::Search(term) => {
            ui_to_app_tx.send(AppEvent::Search { term }).await?;
        }
        UiAction::Play(url) => {
            ui_to_app_tx.send(AppEvent::PlayAudio { url }).await?;
        }
        UiAction::OpenSource(url) => {
            // open::that blocks on some platforms
            tokio::task::spawn_blocking(move || {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(error = %e, url, "failed to open source link");
                }
            });
        }
    }

    Ok(())
}
