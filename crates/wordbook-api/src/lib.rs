use wordbook_types::Entry;

pub mod client;
pub mod error;

pub use client::DictApiClient;
pub use error::ApiError;

/// Lookup service interface.
#[async_trait::async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Fetch the first dictionary entry for a term.
    async fn lookup(&self, term: &str) -> Result<Entry, ApiError>;

    /// Download pronunciation audio bytes.
    async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}
