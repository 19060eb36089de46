use std::collections::HashSet;

use akz_core::dictionary::{DictionaryEntry, LoadError, Sentence};
use serde::Deserialize;

/// Placeholder the dataset uses for missing fields
const ABSENT: &str = "nan";

// JSON structures of the bundled dict.json
#[derive(Debug, Deserialize)]
struct DictionaryJson {
    #[serde(default)]
    words: Option<Vec<EntryJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryJson {
    lemma: String,
    definition: String,
    #[serde(rename = "class", default)]
    word_class: Option<String>,
    #[serde(default)]
    principal_part: Option<String>,
    #[serde(default)]
    derivation: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    related_terms: Option<Vec<String>>,
    #[serde(default)]
    audio: Vec<String>,
    #[serde(default)]
    sentences: Vec<SentenceJson>,
}

#[derive(Debug, Deserialize)]
struct SentenceJson {
    #[serde(rename = "alabama-example", default)]
    akz: Option<String>,
    #[serde(rename = "english-translation", default)]
    en: Option<String>,
}

impl From<EntryJson> for DictionaryEntry {
    fn from(json: EntryJson) -> Self {
        let sentences = json
            .sentences
            .into_iter()
            .filter_map(|s| {
                let example = present(s.akz).unwrap_or_default();
                let translation = present(s.en).unwrap_or_default();
                if example.is_empty() && translation.is_empty() {
                    None
                } else {
                    Some(Sentence {
                        example,
                        translation,
                    })
                }
            })
            .collect();

        DictionaryEntry {
            lemma: json.lemma,
            definition: json.definition,
            word_class: present(json.word_class),
            principal_part: present(json.principal_part),
            derivation: present(json.derivation),
            notes: present(json.notes),
            related_terms: json.related_terms.filter(|terms| !terms.is_empty()),
            audio: json.audio.into_iter().filter(|a| !a.is_empty()).collect(),
            sentences,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != ABSENT
    })
}

/// Alabama-English dictionary, in dataset order
#[derive(Debug, Clone, Default)]
pub struct AlabamaDictionary {
    entries: Vec<DictionaryEntry>,
}

impl AlabamaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{"words": [...]}` dataset format
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let words = data.words.ok_or_else(|| {
            LoadError::InvalidFormat("expected a top-level \"words\" array".to_string())
        })?;

        let entries = words.into_iter().map(DictionaryEntry::from).collect();
        Ok(Self { entries })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DictionaryEntry> {
        self.entries
    }

    /// Append another dictionary's entries after this one's.
    /// Entries already present (same lemma and definition) are skipped.
    pub fn merge(mut self, other: AlabamaDictionary) -> Self {
        let mut seen: HashSet<(String, String)> = self
            .entries
            .iter()
            .map(|e| (e.lemma.clone(), e.definition.clone()))
            .collect();

        for entry in other.entries {
            if seen.insert((entry.lemma.clone(), entry.definition.clone())) {
                self.entries.push(entry);
            }
        }

        self
    }
}
