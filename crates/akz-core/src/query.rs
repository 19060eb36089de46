use crate::language::{FieldHint, LanguageProcessor};

/// One search invocation as the shell submits it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub text: String,
    /// Interpret `text` as a `C`/`V` shorthand regex over lemmas
    pub regex_mode: bool,
    /// Keep only entries that carry audio
    pub audio_only: bool,
}

impl Query {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn pattern(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            regex_mode: true,
            ..Self::default()
        }
    }

    pub fn with_audio_only(mut self, audio_only: bool) -> Self {
        self.audio_only = audio_only;
        self
    }
}

/// What candidates are ranked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    /// Normalized, marker-free query text
    pub text: String,
    pub hint: FieldHint,
}

impl Needle {
    pub fn new<P: LanguageProcessor + ?Sized>(query: &Query, processor: &P) -> Self {
        let raw = query.text.trim();
        Self {
            text: processor.search_key(raw),
            hint: processor.field_hint(raw),
        }
    }
}
