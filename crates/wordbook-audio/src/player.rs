use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio worker is not running")]
    WorkerGone,

    #[error("failed to start audio worker: {0}")]
    Thread(#[from] std::io::Error),
}

enum PlayerCommand {
    Play(Vec<u8>),
    Stop,
}

/// Handle to the single shared audio output.
///
/// The rodio output stream is not `Send`, so a dedicated thread owns it and
/// commands cross a channel. A new play request replaces whatever is
/// currently playing.
#[derive(Clone)]
pub struct AudioPlayer {
    tx: kanal::AsyncSender<PlayerCommand>,
}

impl AudioPlayer {
    /// Start the playback worker. The output device is opened lazily on the
    /// first play request.
    pub fn spawn(volume: f32) -> Result<Self, AudioError> {
        let (tx, rx) = kanal::bounded_async::<PlayerCommand>(8);
        let rx = rx.to_sync();

        std::thread::Builder::new()
            .name("wordbook-audio".to_string())
            .spawn(move || playback_thread(rx, volume))?;

        Ok(Self { tx })
    }

    /// Play encoded audio bytes, replacing any current playback. Decoding
    /// happens on the worker thread.
    pub async fn play(&self, bytes: Vec<u8>) -> Result<(), AudioError> {
        self.tx
            .send(PlayerCommand::Play(bytes))
            .await
            .map_err(|_| AudioError::WorkerGone)
    }

    pub async fn stop(&self) -> Result<(), AudioError> {
        self.tx
            .send(PlayerCommand::Stop)
            .await
            .map_err(|_| AudioError::WorkerGone)
    }
}

fn ensure_output(output: &mut Option<OutputStream>) -> Option<&OutputStream> {
    if output.is_none() {
        match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => *output = Some(stream),
            Err(e) => {
                tracing::error!(error = %e, "failed to open audio output device");
                return None;
            }
        }
    }

    output.as_ref()
}

fn playback_thread(rx: kanal::Receiver<PlayerCommand>, volume: f32) {
    let mut output: Option<OutputStream> = None;
    let mut current: Option<Sink> = None;

    while let Ok(command) = rx.recv() {
        match command {
            PlayerCommand::Play(bytes) => {
                let Some(stream) = ensure_output(&mut output) else {
                    continue;
                };

                match Decoder::new(Cursor::new(bytes)) {
                    Ok(source) => {
                        if let Some(previous) = current.take() {
                            previous.stop();
                        }

                        let sink = Sink::connect_new(stream.mixer());
                        sink.set_volume(volume);
                        sink.append(source);
                        current = Some(sink);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "could not decode pronunciation audio");
                    }
                }
            }
            PlayerCommand::Stop => {
                if let Some(sink) = current.take() {
                    sink.stop();
                }
            }
        }
    }

    // All handles dropped; stop playback before the thread exits.
    if let Some(sink) = current.take() {
        sink.stop();
    }
    tracing::debug!("audio worker stopped");
}
