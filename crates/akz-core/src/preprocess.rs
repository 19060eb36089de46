use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A single text transform. Transforms compose with [`Preprocessor::then`].
pub trait Preprocessor: Send + Sync {
    fn process(&self, text: &str) -> String;

    fn then<P: Preprocessor>(self, next: P) -> Chain<Self, P>
    where
        Self: Sized,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

/// Unicode lower-casing
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldCase;

impl Preprocessor for FoldCase {
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Decompose, drop combining marks, recompose.
///
/// Letters that are not composed with a mark (`ɬ`, `ⁿ`) pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripDiacritics;

impl Preprocessor for StripDiacritics {
    fn process(&self, text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }
        text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }
}

/// Deletes every occurrence of the given characters
#[derive(Debug, Clone, Copy)]
pub struct RemoveChars(pub &'static [char]);

impl Preprocessor for RemoveChars {
    fn process(&self, text: &str) -> String {
        text.chars().filter(|c| !self.0.contains(c)).collect()
    }
}

/// Deletes literal tokens, one pass per token in the given order.
///
/// Order matters when one token is a prefix of another (`#english` before `#en`).
#[derive(Debug, Clone, Copy)]
pub struct RemoveTokens(pub &'static [&'static str]);

impl Preprocessor for RemoveTokens {
    fn process(&self, text: &str) -> String {
        let mut text = text.to_string();
        for token in self.0 {
            if text.contains(token) {
                text = text.replace(token, "");
            }
        }
        text
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Preprocessor, B: Preprocessor> Preprocessor for Chain<A, B> {
    fn process(&self, text: &str) -> String {
        self.second.process(&self.first.process(text))
    }
}
