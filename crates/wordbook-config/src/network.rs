use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Base URL of the dictionary entries endpoint; the search term is
    /// appended as a path segment.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let api_url = env::var("DICT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_seconds = env::var("DICT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            api_url,
            timeout_seconds,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
