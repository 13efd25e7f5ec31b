use std::time::Duration;

use async_trait::async_trait;
use wordbook_types::Entry;

use crate::{ApiError, DictionaryApi};

/// Client for the dictionaryapi.dev entries endpoint.
#[derive(Clone)]
pub struct DictApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    /// The term is percent-encoded as a single path segment, so spaces and
    /// punctuation survive the trip.
    fn entry_url(&self, term: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(term)
        )
    }
}

#[async_trait]
impl DictionaryApi for DictApiClient {
    async fn lookup(&self, term: &str) -> Result<Entry, ApiError> {
        let response = self.client.get(self.entry_url(term)).send().await?;

        // The service reports unknown words with a non-success status;
        // the body is not worth parsing in that case.
        if !response.status().is_success() {
            return Err(ApiError::NotFound {
                term: term.to_string(),
            });
        }

        let entries: Vec<Entry> = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        entries.into_iter().next().ok_or_else(|| ApiError::NotFound {
            term: term.to_string(),
        })
    }

    async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> DictApiClient {
        DictApiClient::new(base_url.to_string(), Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn entry_url_appends_the_term() {
        let client = client("https://api.dictionaryapi.dev/api/v2/entries/en");
        assert_eq!(
            client.entry_url("hello"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
    }

    #[test]
    fn entry_url_percent_encodes_the_segment() {
        let client = client("https://api.dictionaryapi.dev/api/v2/entries/en/");
        assert_eq!(
            client.entry_url("ice cream"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
    }

    #[test]
    fn empty_entry_list_maps_to_not_found() {
        let entries: Vec<Entry> = serde_json::from_str("[]").expect("parse");
        let outcome = entries.into_iter().next().ok_or_else(|| ApiError::NotFound {
            term: "zzzqrx".to_string(),
        });

        assert!(matches!(outcome, Err(ApiError::NotFound { term }) if term == "zzzqrx"));
    }
}
