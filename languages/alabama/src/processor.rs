use akz_core::language::{FieldHint, LanguageProcessor};
use akz_core::pattern::PatternClasses;
use akz_core::preprocess::{
    Chain, FoldCase, Preprocessor, RemoveChars, RemoveTokens, StripDiacritics,
};

pub const CONSONANTS: &str = "bcdfhkɬlmnpstwy";
pub const VOWELS: &str = "aeoiáóéíàòìè";

/// Subscript numerals that tell homographs apart (aba₁, aba₂)
const SUBSCRIPTS: &[char] = &[
    '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}', '\u{2085}', '\u{2086}', '\u{2087}',
    '\u{2088}', '\u{2089}',
];

/// Query control tokens; `#english` must go before its prefix `#en`
const MARKERS: &[&str] = &["#english", " ", "#en", "#akz", "#alabama"];

/// Alabama (Muskogean) text processor
pub struct AlabamaProcessor {
    normalizer: Chain<Chain<FoldCase, StripDiacritics>, RemoveChars>,
    markers: RemoveTokens,
}

impl AlabamaProcessor {
    pub fn new() -> Self {
        Self {
            normalizer: FoldCase.then(StripDiacritics).then(RemoveChars(SUBSCRIPTS)),
            markers: RemoveTokens(MARKERS),
        }
    }
}

impl Default for AlabamaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for AlabamaProcessor {
    fn language_code(&self) -> &str {
        "akz"
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.process(text)
    }

    fn strip_markers(&self, text: &str) -> String {
        self.markers.process(text)
    }

    fn field_hint(&self, query: &str) -> FieldHint {
        let query = query.to_lowercase();
        if query.contains("#en") {
            FieldHint::Definition
        } else {
            // `#akz` / `#alabama` ask for the lemma, which is also the default
            FieldHint::Lemma
        }
    }

    fn pattern_classes(&self) -> PatternClasses {
        PatternClasses {
            consonants: CONSONANTS,
            vowels: VOWELS,
        }
    }
}
