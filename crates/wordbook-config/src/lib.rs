use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod network;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,

    /// Log file path; the terminal itself belongs to the TUI.
    pub log_file: String,
}

impl Config {
    pub fn new() -> Self {
        let log_file = env::var("WORDBOOK_LOG").unwrap_or_else(|_| "wordbook.log".to_string());

        Config {
            network: NetworkConfig::new(),
            ui: UiConfig::new(),
            audio: AudioConfig::new(),

            log_file,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
