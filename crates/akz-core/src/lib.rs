pub mod dictionary;
pub mod engine;
pub mod error;
pub mod filter;
pub mod keys;
pub mod language;
pub mod pattern;
pub mod preprocess;
pub mod query;
pub mod rank;
pub mod window;

#[cfg(test)]
mod testing;

pub use dictionary::{DictionaryEntry, DictionaryLoader, LoadError, Sentence};
pub use engine::{SearchEngine, SearchPage};
pub use error::SearchError;
pub use language::{FieldHint, LanguageProcessor};
pub use pattern::PatternClasses;
pub use query::Query;
pub use window::{ResultWindow, WindowState};
