use wordbook_types::{Entry, EntryView, SearchError};

use crate::preprocess::normalize_term;
use crate::view::entry_view;

/// Exclusive search state owned by the app event loop.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        term: String,
        seq: u64,
    },
    Loaded(EntryView),
    Failed(SearchError),
}

/// A request handed to the lookup adapter. The sequence number ties the
/// eventual resolution back to this submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued after this one; the outcome is dropped.
    Stale,
}

/// Request/loading/error state machine.
///
/// Each submit bumps a monotonically increasing sequence number, so an
/// outcome for an older request never overwrites a newer one.
#[derive(Debug, Default)]
pub struct SearchLifecycle {
    state: SearchState,
    next_seq: u64,
}

impl SearchLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    /// Validate and issue a new search. Terms that normalize to empty fail
    /// locally and never produce a pending request.
    pub fn submit(&mut self, raw: &str) -> Result<PendingSearch, SearchError> {
        let term = normalize_term(raw);
        if term.is_empty() {
            self.state = SearchState::Failed(SearchError::EmptyInput);
            return Err(SearchError::EmptyInput);
        }

        self.next_seq += 1;
        self.state = SearchState::Loading {
            term: term.clone(),
            seq: self.next_seq,
        };

        Ok(PendingSearch {
            seq: self.next_seq,
            term,
        })
    }

    /// Apply the outcome of a pending request. Outcomes for anything but
    /// the latest issued request are discarded.
    pub fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<Entry, SearchError>,
    ) -> Resolution {
        if seq != self.next_seq {
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(entry) => SearchState::Loaded(entry_view(&entry)),
            Err(err) => SearchState::Failed(err),
        };

        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> Entry {
        Entry {
            word: word.to_string(),
            phonetics: vec![],
            meanings: vec![],
            source_urls: vec![],
        }
    }

    #[test]
    fn blank_submit_fails_without_a_pending_request() {
        let mut lifecycle = SearchLifecycle::new();

        assert_eq!(lifecycle.submit("   "), Err(SearchError::EmptyInput));
        assert!(matches!(
            lifecycle.state(),
            SearchState::Failed(SearchError::EmptyInput)
        ));
        assert!(!lifecycle.in_flight());
    }

    #[test]
    fn submit_enters_loading_with_normalized_term() {
        let mut lifecycle = SearchLifecycle::new();

        let pending = lifecycle.submit("  hello ").expect("pending");
        assert_eq!(pending.term, "hello");
        assert!(lifecycle.in_flight());
        assert!(matches!(
            lifecycle.state(),
            SearchState::Loading { term, .. } if term == "hello"
        ));
    }

    #[test]
    fn success_resolves_to_loaded() {
        let mut lifecycle = SearchLifecycle::new();
        let pending = lifecycle.submit("hello").expect("pending");

        let resolution = lifecycle.resolve(pending.seq, Ok(entry("hello")));
        assert_eq!(resolution, Resolution::Applied);
        assert!(matches!(
            lifecycle.state(),
            SearchState::Loaded(view) if view.word == "hello"
        ));
    }

    #[test]
    fn failure_resolves_to_failed() {
        let mut lifecycle = SearchLifecycle::new();
        let pending = lifecycle.submit("zzzqrx").expect("pending");

        lifecycle.resolve(pending.seq, Err(SearchError::NotFound("zzzqrx".into())));
        assert!(matches!(
            lifecycle.state(),
            SearchState::Failed(SearchError::NotFound(term)) if term == "zzzqrx"
        ));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut lifecycle = SearchLifecycle::new();
        let first = lifecycle.submit("slow").expect("pending");
        let second = lifecycle.submit("fast").expect("pending");

        // The overtaken request resolves last but must not win.
        assert_eq!(
            lifecycle.resolve(second.seq, Ok(entry("fast"))),
            Resolution::Applied
        );
        assert_eq!(
            lifecycle.resolve(first.seq, Ok(entry("slow"))),
            Resolution::Stale
        );
        assert!(matches!(
            lifecycle.state(),
            SearchState::Loaded(view) if view.word == "fast"
        ));
    }

    #[test]
    fn failure_replaces_a_previously_loaded_entry() {
        let mut lifecycle = SearchLifecycle::new();
        let pending = lifecycle.submit("hello").expect("pending");
        lifecycle.resolve(pending.seq, Ok(entry("hello")));

        let pending = lifecycle.submit("zzzqrx").expect("pending");
        lifecycle.resolve(pending.seq, Err(SearchError::NotFound("zzzqrx".into())));

        assert!(matches!(lifecycle.state(), SearchState::Failed(_)));
    }

    #[test]
    fn resubmitting_the_same_term_is_idempotent() {
        let mut lifecycle = SearchLifecycle::new();

        for _ in 0..2 {
            let pending = lifecycle.submit("hello").expect("pending");
            assert_eq!(lifecycle.resolve(pending.seq, Ok(entry("hello"))), Resolution::Applied);
            match lifecycle.state() {
                SearchState::Loaded(view) => assert_eq!(view.word, "hello"),
                other => panic!("unexpected state: {other:?}"),
            }
        }
    }
}
