use serde::{Deserialize, Serialize};

fn default_max_definitions() -> usize {
    4
}

fn default_max_synonyms() -> usize {
    12
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Definitions rendered per part-of-speech group.
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
    /// Synonym chips rendered per meaning.
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_definitions: default_max_definitions(),
            max_synonyms: default_max_synonyms(),
        }
    }
}
