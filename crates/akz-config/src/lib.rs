use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod search;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Defaults overridden by `AKZ_*` environment variables
    pub fn new() -> Self {
        let mut search = SearchConfig::default();
        if let Some(page_size) = env_parse::<usize>("AKZ_PAGE_SIZE") {
            search.page_size = page_size;
        }
        if let Some(regex_mode) = env_flag("AKZ_REGEX_MODE") {
            search.regex_mode = regex_mode;
        }
        if let Some(audio_only) = env_flag("AKZ_AUDIO_ONLY") {
            search.audio_only = audio_only;
        }

        let mut dictionary = DictionaryConfig::default();
        if let Ok(path) = env::var("AKZ_DICT_PATH") {
            dictionary.path = path;
        }

        Config { search, dictionary }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"search":{"audio_only":true}}"#).unwrap();
        assert!(config.search.audio_only);
        assert!(!config.search.regex_mode);
        assert_eq!(config.search.page_size, 50);
        assert_eq!(config.dictionary.path, "dict.json");
        assert!(config.dictionary.additional_paths.is_empty());
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let search = SearchConfig {
            page_size: 0,
            ..SearchConfig::default()
        };
        assert_eq!(search.effective_page_size(), 50);
    }
}
