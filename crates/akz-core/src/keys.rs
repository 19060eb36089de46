use crate::dictionary::DictionaryEntry;
use crate::language::{FieldHint, LanguageProcessor};

/// Precomputed comparison forms of one entry's searchable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKeys {
    /// `normalize(lemma)`
    pub folded_lemma: String,
    /// `normalize(definition)`
    pub folded_definition: String,
    /// `strip_markers(normalize(lemma))`
    pub lemma: String,
    /// `strip_markers(normalize(definition))`
    pub definition: String,
}

impl EntryKeys {
    pub fn new<P: LanguageProcessor + ?Sized>(entry: &DictionaryEntry, processor: &P) -> Self {
        let folded_lemma = processor.normalize(&entry.lemma);
        let folded_definition = processor.normalize(&entry.definition);
        Self {
            lemma: processor.strip_markers(&folded_lemma),
            definition: processor.strip_markers(&folded_definition),
            folded_lemma,
            folded_definition,
        }
    }

    /// Search key of the field a query is ranked against
    pub fn field(&self, hint: FieldHint) -> &str {
        match hint {
            FieldHint::Lemma => &self.lemma,
            FieldHint::Definition => &self.definition,
        }
    }

    /// Folded (marker-preserving) form of the ranked field
    pub fn folded_field(&self, hint: FieldHint) -> &str {
        match hint {
            FieldHint::Lemma => &self.folded_lemma,
            FieldHint::Definition => &self.folded_definition,
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lemma.contains(needle) || self.definition.contains(needle)
    }

    pub fn is_exact(&self, needle: &str) -> bool {
        self.lemma == needle || self.definition == needle
    }
}

/// Build keys for a whole collection, index-aligned with it
pub fn build_keys<P: LanguageProcessor + ?Sized>(
    entries: &[DictionaryEntry],
    processor: &P,
) -> Vec<EntryKeys> {
    entries.iter().map(|e| EntryKeys::new(e, processor)).collect()
}
