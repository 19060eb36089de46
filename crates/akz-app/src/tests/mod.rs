
use std::sync::Arc;

use akz_config::Config;
use akz_core::SearchEngine;
use akz_lang_alabama::{AlabamaLoader, AlabamaProcessor};

use crate::state::AppState;

const SAMPLE_DICT: &str = r#"{
    "words": [
        {"lemma": "aba", "definition": "house", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": ["aba.mp3"]},
        {"lemma": "abanna", "definition": "houses", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []},
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
        {"lemma": "ciki", "definition": "dog", "class": "nan", "principalPart": "nan", "derivation": "nan", "audio": []}
    ]
}"#;

fn sample_state(page_size: usize) -> Arc<AppState> {
    let dict = AlabamaLoader::load_from_str(SAMPLE_DICT).expect("sample dictionary parses");
    let engine = SearchEngine::with_page_size(AlabamaProcessor::new(), dict.into_entries(), page_size);
    Arc::new(AppState::new(Config::default(), engine))
}
