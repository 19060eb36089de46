mod common;

use akz_core::{DictionaryLoader, LoadError};
use akz_lang_alabama::AlabamaLoader;
use assert2::{check, let_assert};
use common::{DictDir, SAMPLE_DICT, dict_dir};
use rstest::rstest;

#[rstest]
fn load_file_reads_all_entries(dict_dir: DictDir) {
    let path = dict_dir.write("dict.json", SAMPLE_DICT);
    let entries = AlabamaLoader.load_from_file(&path).unwrap();
    check!(entries.len() == 8);
    check!(entries[0].lemma == "aba");
    check!(entries[3].word_class.as_deref() == Some("I-LI"));
}

#[rstest]
fn missing_file_is_reported(dict_dir: DictDir) {
    let result = AlabamaLoader::load_file(&dict_dir.path().join("missing.json"));
    let_assert!(Err(LoadError::FileNotFound(path)) = result);
    check!(path.ends_with("missing.json"));
}

#[rstest]
fn malformed_file_is_a_parse_error(dict_dir: DictDir) {
    let path = dict_dir.write("broken.json", "{\"words\": [");
    let result = AlabamaLoader::load_file(&path);
    check!(matches!(result, Err(LoadError::ParseError(_))));
}

#[rstest]
fn file_without_words_is_invalid(dict_dir: DictDir) {
    let path = dict_dir.write("other.json", r#"{"version": 3}"#);
    let result = AlabamaLoader::load_file(&path);
    let_assert!(Err(LoadError::InvalidFormat(message)) = result);
    check!(message.contains("words"));
}

#[rstest]
fn load_all_appends_and_skips_broken_extras(dict_dir: DictDir) {
    let primary = dict_dir.write("dict.json", SAMPLE_DICT);
    let extra = dict_dir.write(
        "extra.json",
        r#"{"words": [
            {"lemma": "aba", "definition": "house", "principalPart": "nan", "derivation": "nan", "audio": []},
            {"lemma": "isto", "definition": "deer", "principalPart": "nan", "derivation": "nan", "audio": []}
        ]}"#,
    );
    let broken = dict_dir.write("broken.json", "not json");

    let dict = AlabamaLoader::load_all(
        &primary,
        &[
            extra.display().to_string(),
            broken.display().to_string(),
        ],
    )
    .unwrap();

    check!(dict.entry_count() == 9);
    check!(dict.entries().last().map(|e| e.lemma.as_str()) == Some("isto"));
}

#[test]
fn supported_formats() {
    check!(AlabamaLoader.supported_formats() == ["json"]);
}
