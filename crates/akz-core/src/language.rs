use crate::pattern::PatternClasses;

/// Text conditioning for one dictionary language
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639 code: "akz", ...)
    fn language_code(&self) -> &str;

    /// Fold case and diacritics so accented and bare forms compare equal
    fn normalize(&self, text: &str) -> String;

    /// Remove query-only control tokens
    fn strip_markers(&self, text: &str) -> String;

    /// Which entry field the raw query asks to be ranked against
    fn field_hint(&self, query: &str) -> FieldHint;

    /// Character classes behind the `C` and `V` pattern shorthands
    fn pattern_classes(&self) -> PatternClasses;

    /// Normalized, marker-free form of `text`; the key every comparison uses
    fn search_key(&self, text: &str) -> String {
        self.strip_markers(&self.normalize(text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldHint {
    #[default]
    Lemma,
    Definition,
}
