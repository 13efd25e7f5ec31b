use wordbook_types::{DefinitionView, Entry, EntryView, MeaningView};

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// First phonetic transcription with a usable text field, in source order.
pub fn first_phonetic_text(entry: &Entry) -> Option<String> {
    entry
        .phonetics
        .iter()
        .find_map(|p| non_empty(&p.text))
        .map(str::to_string)
}

/// First phonetic with a usable audio URL, in source order. Independent of
/// the text scan; the two need not come from the same list element.
pub fn first_audio_url(entry: &Entry) -> Option<String> {
    entry
        .phonetics
        .iter()
        .find_map(|p| non_empty(&p.audio))
        .map(str::to_string)
}

/// Build the display model for an entry.
pub fn entry_view(entry: &Entry) -> EntryView {
    EntryView {
        word: entry.word.clone(),
        phonetic: first_phonetic_text(entry),
        audio_url: first_audio_url(entry),
        meanings: entry
            .meanings
            .iter()
            .map(|meaning| MeaningView {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning
                    .definitions
                    .iter()
                    .map(|d| DefinitionView {
                        definition: d.definition.clone(),
                        example: non_empty(&d.example).map(str::to_string),
                    })
                    .collect(),
                synonyms: meaning
                    .synonyms
                    .iter()
                    .filter(|s| !s.trim().is_empty())
                    .cloned()
                    .collect(),
            })
            .collect(),
        source_url: entry
            .source_urls
            .iter()
            .find(|u| !u.trim().is_empty())
            .cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbook_types::Phonetic;

    fn phonetic(text: Option<&str>, audio: Option<&str>) -> Phonetic {
        Phonetic {
            text: text.map(str::to_string),
            audio: audio.map(str::to_string),
        }
    }

    fn entry_with_phonetics(phonetics: Vec<Phonetic>) -> Entry {
        Entry {
            word: "test".into(),
            phonetics,
            meanings: vec![],
            source_urls: vec![],
        }
    }

    #[test]
    fn picks_first_non_empty_text_scanning_in_order() {
        let entry = entry_with_phonetics(vec![
            phonetic(None, None),
            phonetic(Some(""), None),
            phonetic(Some("/tɛst/"), None),
            phonetic(Some("/other/"), None),
        ]);

        assert_eq!(first_phonetic_text(&entry).as_deref(), Some("/tɛst/"));
    }

    #[test]
    fn text_and_audio_scans_are_independent() {
        let entry = entry_with_phonetics(vec![
            phonetic(Some("/tɛst/"), Some("")),
            phonetic(None, Some("https://example.com/test.mp3")),
        ]);

        assert_eq!(first_phonetic_text(&entry).as_deref(), Some("/tɛst/"));
        assert_eq!(
            first_audio_url(&entry).as_deref(),
            Some("https://example.com/test.mp3")
        );
    }

    #[test]
    fn no_audio_anywhere_yields_none() {
        let entry = entry_with_phonetics(vec![
            phonetic(Some("/tɛst/"), None),
            phonetic(None, Some("")),
        ]);

        assert_eq!(first_audio_url(&entry), None);
    }

    #[test]
    fn view_keeps_word_and_first_source_url() {
        let mut entry = entry_with_phonetics(vec![]);
        entry.source_urls = vec!["".into(), "https://en.wiktionary.org/wiki/test".into()];

        let view = entry_view(&entry);
        assert_eq!(view.word, "test");
        assert_eq!(
            view.source_url.as_deref(),
            Some("https://en.wiktionary.org/wiki/test")
        );
    }

    #[test]
    fn view_drops_blank_synonyms_and_examples() {
        let mut entry = entry_with_phonetics(vec![]);
        entry.meanings = vec![wordbook_types::Meaning {
            part_of_speech: "noun".into(),
            definitions: vec![wordbook_types::Definition {
                definition: "A trial.".into(),
                example: Some("   ".into()),
            }],
            synonyms: vec!["".into(), "trial".into()],
        }];

        let view = entry_view(&entry);
        assert_eq!(view.meanings[0].definitions[0].example, None);
        assert_eq!(view.meanings[0].synonyms, vec!["trial".to_string()]);
    }
}
