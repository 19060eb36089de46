//! Shared fixtures for the Alabama integration tests.

#![allow(dead_code)] // Helpers are shared across test crates

use std::path::{Path, PathBuf};

use akz_config::search::SearchConfig;
use akz_core::SearchEngine;
use akz_lang_alabama::{AlabamaLoader, AlabamaProcessor};
use rstest::fixture;
use tempfile::TempDir;

/// Small dataset in the bundled `dict.json` format
pub const SAMPLE_DICT: &str = r#"{
    "words": [
        {"lemma": "aba", "definition": "house", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": ["aba.mp3"]},
        {"lemma": "abanna", "definition": "houses", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []},
        {"lemma": "ába₂", "definition": "father", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []},
        {
            "lemma": "hica",
            "definition": "to see; to look at",
            "class": "I-LI",
            "principalPart": "hiccali, hicilka, hicaska",
            "derivation": "nan",
            "audio": ["hica.mp3"],
            "sentences": [{"alabama-example": "hicali", "english-translation": "I see it"}]
        },
        {"lemma": "ikhico", "definition": "Negative form of hica", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []},
        {"lemma": "ɬakba", "definition": "sand", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []},
        {"lemma": "óba", "definition": "rain", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": ["oba.mp3"]},
        {"lemma": "ciki", "definition": "dog", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []}
    ]
}"#;

pub type AlabamaEngine = SearchEngine<AlabamaProcessor>;

/// Engine over [`SAMPLE_DICT`] with the default page size
#[fixture]
pub fn engine() -> AlabamaEngine {
    let dict = AlabamaLoader::load_from_str(SAMPLE_DICT).expect("sample dictionary parses");
    SearchEngine::new(
        AlabamaProcessor::new(),
        dict.into_entries(),
        &SearchConfig::default(),
    )
}

/// Dataset of `count` generated entries that all match the query "w"
pub fn generated_dict(count: usize) -> String {
    let words: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"lemma": "w{i:04}", "definition": "word {i}", "principalPart": "nan", "derivation": "nan", "audio": []}}"#
            )
        })
        .collect();
    format!(r#"{{"words": [{}]}}"#, words.join(","))
}

/// Temporary directory holding dictionary files; removed on drop
pub struct DictDir {
    temp: TempDir,
}

impl DictDir {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents).expect("write dictionary file");
        path
    }
}

#[fixture]
pub fn dict_dir() -> DictDir {
    DictDir::new()
}

pub fn lemmas(page: &akz_core::SearchPage<'_>) -> Vec<String> {
    page.entries.iter().map(|e| e.lemma.clone()).collect()
}
