use std::path::Path;

/// Individual dictionary entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    /// Headword in the source language
    pub lemma: String,
    /// Semicolon-separated senses
    pub definition: String,
    pub word_class: Option<String>,
    /// Comma-separated inflected forms
    pub principal_part: Option<String>,
    pub derivation: Option<String>,
    pub notes: Option<String>,
    pub related_terms: Option<Vec<String>>,
    /// Audio resource identifiers
    pub audio: Vec<String>,
    pub sentences: Vec<Sentence>,
}

impl DictionaryEntry {
    pub fn new(lemma: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            definition: definition.into(),
            ..Self::default()
        }
    }

    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub example: String,
    pub translation: String,
}

/// Load dictionaries from files or embedded data
pub trait DictionaryLoader {
    /// Load all entries from a file path, in file order
    fn load_from_file(&self, path: &Path) -> Result<Vec<DictionaryEntry>, LoadError>;

    /// Supported file formats
    fn supported_formats(&self) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
