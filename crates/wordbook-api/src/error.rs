use wordbook_types::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status, or a success response with no entries.
    #[error("no dictionary entry for \"{term}\"")]
    NotFound { term: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<ApiError> for SearchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { term } => SearchError::NotFound(term),
            ApiError::Network(e) => SearchError::Request(e.to_string()),
            ApiError::Malformed(msg) => SearchError::Request(msg),
        }
    }
}
