use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_volume() -> f32 {
    1.0
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Enable pronunciation playback.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl AudioConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            volume: default_volume(),
        }
    }
}
