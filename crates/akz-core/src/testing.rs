//! Minimal processor and fixtures for unit tests.

use crate::dictionary::DictionaryEntry;
use crate::language::{FieldHint, LanguageProcessor};
use crate::pattern::PatternClasses;
use crate::preprocess::{FoldCase, Preprocessor, RemoveChars, RemoveTokens, StripDiacritics};

pub(crate) struct TestProcessor;

impl LanguageProcessor for TestProcessor {
    fn language_code(&self) -> &str {
        "test"
    }

    fn normalize(&self, text: &str) -> String {
        FoldCase
            .then(StripDiacritics)
            .then(RemoveChars(&['\u{2081}', '\u{2082}', '\u{2083}']))
            .process(text)
    }

    fn strip_markers(&self, text: &str) -> String {
        RemoveTokens(&["#english", " ", "#en", "#akz", "#alabama"]).process(text)
    }

    fn field_hint(&self, query: &str) -> FieldHint {
        if query.to_lowercase().contains("#en") {
            FieldHint::Definition
        } else {
            FieldHint::Lemma
        }
    }

    fn pattern_classes(&self) -> PatternClasses {
        PatternClasses {
            consonants: "bcdfhkɬlmnpstwy",
            vowels: "aeoiáóéíàòìè",
        }
    }
}

pub(crate) fn entry(lemma: &str, definition: &str) -> DictionaryEntry {
    DictionaryEntry::new(lemma, definition)
}

pub(crate) fn entry_with_audio(lemma: &str, definition: &str, audio: &str) -> DictionaryEntry {
    DictionaryEntry {
        audio: vec![audio.to_string()],
        ..DictionaryEntry::new(lemma, definition)
    }
}
