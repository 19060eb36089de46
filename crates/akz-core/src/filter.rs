use regex::Regex;

use crate::dictionary::DictionaryEntry;
use crate::error::SearchError;
use crate::keys::EntryKeys;
use crate::language::LanguageProcessor;
use crate::pattern;
use crate::query::Query;

/// Candidate test for one query
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Substring of the lemma or definition search key
    Plain(String),
    /// Unanchored regex over the raw lemma
    Pattern(Regex),
}

impl Matcher {
    pub fn new<P: LanguageProcessor + ?Sized>(
        query: &Query,
        processor: &P,
    ) -> Result<Self, SearchError> {
        if query.regex_mode {
            let regex = pattern::compile(&query.text, &processor.pattern_classes())?;
            Ok(Self::Pattern(regex))
        } else {
            Ok(Self::Plain(processor.search_key(query.text.trim())))
        }
    }

    pub fn matches(&self, entry: &DictionaryEntry, keys: &EntryKeys) -> bool {
        match self {
            Self::Plain(needle) => keys.contains(needle),
            Self::Pattern(regex) => regex.is_match(&entry.lemma),
        }
    }
}

/// Indices of matching entries, in collection order.
///
/// `entries` and `keys` must be index-aligned.
pub fn filter(
    entries: &[DictionaryEntry],
    keys: &[EntryKeys],
    matcher: &Matcher,
    audio_only: bool,
) -> Vec<usize> {
    debug_assert_eq!(entries.len(), keys.len());
    let mut candidates: Vec<usize> = entries
        .iter()
        .zip(keys)
        .enumerate()
        .filter(|(_, (entry, keys))| matcher.matches(entry, keys))
        .map(|(idx, _)| idx)
        .collect();

    if audio_only {
        retain_audio(entries, &mut candidates);
    }

    candidates
}

/// Drop candidates without audio
pub fn retain_audio(entries: &[DictionaryEntry], candidates: &mut Vec<usize>) {
    candidates.retain(|&idx| entries[idx].has_audio());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::build_keys;
    use crate::testing::{TestProcessor, entry, entry_with_audio};

    fn run(entries: &[DictionaryEntry], query: &Query) -> Vec<usize> {
        let keys = build_keys(entries, &TestProcessor);
        let matcher = Matcher::new(query, &TestProcessor).unwrap();
        filter(entries, &keys, &matcher, query.audio_only)
    }

    #[test]
    fn test_plain_matches_lemma_or_definition() {
        let entries = vec![
            entry("aba", "house"),
            entry("abanna", "houses"),
            entry("ciki", "dog"),
        ];
        assert_eq!(run(&entries, &Query::plain("aba")), vec![0, 1]);
        assert_eq!(run(&entries, &Query::plain("HOUSE")), vec![0, 1]);
        assert_eq!(run(&entries, &Query::plain("do")), vec![2]);
    }

    #[test]
    fn test_plain_ignores_accents_and_markers() {
        let entries = vec![entry("áta", "to be"), entry("ata", "other")];
        assert_eq!(run(&entries, &Query::plain("ata")), vec![0, 1]);
        assert_eq!(run(&entries, &Query::plain("#en to be")), vec![0]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let entries = vec![entry("a", "x"), entry("b", "y")];
        assert_eq!(run(&entries, &Query::plain("")), vec![0, 1]);
        assert_eq!(run(&entries, &Query::plain("   ")), vec![0, 1]);
    }

    #[test]
    fn test_pattern_uses_raw_lemma_only() {
        let entries = vec![entry("aba", "house"), entry("Aba", "x"), entry("ii", "aba")];
        assert_eq!(run(&entries, &Query::pattern("aba")), vec![0]);
        assert_eq!(run(&entries, &Query::pattern("C")), vec![0, 1]);
    }

    #[test]
    fn test_audio_only() {
        let entries = vec![
            entry("aba", "house"),
            entry_with_audio("abba", "up", "abba.mp3"),
        ];
        assert_eq!(run(&entries, &Query::plain("").with_audio_only(true)), vec![1]);

        let mut candidates = vec![0, 1];
        retain_audio(&entries, &mut candidates);
        let once = candidates.clone();
        retain_audio(&entries, &mut candidates);
        assert_eq!(candidates, once);
    }
}
