use serde::{Deserialize, Serialize};

/// One dictionary entry as returned by the lookup service. The service
/// responds with an array of these; only the first element is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

/// Transcription/audio pair. Either field may be missing or empty; there
/// is no ordering guarantee from the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Display model derived from the first [`Entry`] of a response.
#[derive(Debug, Clone)]
pub struct EntryView {
    pub word: String,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub meanings: Vec<MeaningView>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DefinitionView {
    pub definition: String,
    pub example: Option<String>,
}

impl EntryView {
    /// Synonym chips in display order, deduplicated across meanings.
    pub fn synonym_chips(&self) -> Vec<&str> {
        let mut chips: Vec<&str> = Vec::new();
        for meaning in &self.meanings {
            for synonym in &meaning.synonyms {
                if !chips.iter().any(|c| c.eq_ignore_ascii_case(synonym)) {
                    chips.push(synonym.as_str());
                }
            }
        }
        chips
    }
}

/// User-facing error taxonomy. Input errors are recovered locally and
/// never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a word to search for")]
    EmptyInput,

    #[error("No definitions found for \"{0}\"")]
    NotFound(String),

    #[error("Could not reach the dictionary service: {0}")]
    Request(String),
}

/// Events exchanged between the UI task, the app event loop, and spawned
/// lookup tasks.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// UI -> app: look up a term.
    Search { term: String },
    /// UI -> app: fetch and play pronunciation audio.
    PlayAudio { url: String },
    /// Lookup task -> app: a pending request resolved.
    SearchResolved {
        seq: u64,
        outcome: Result<Entry, SearchError>,
    },
    /// App -> UI: a request was issued for `term`.
    ShowLoading { term: String },
    /// App -> UI: display a resolved entry.
    ShowEntry(EntryView),
    /// App -> UI: display an error message in place of any result.
    ShowError(String),
    /// Shut down.
    Close,
}
