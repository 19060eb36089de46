use std::sync::atomic::AtomicU64;

use akz_config::Config;
use akz_core::SearchEngine;
use akz_lang_alabama::AlabamaProcessor;
use tokio::sync::RwLock;

/// Search toggles the user flips between searches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchModes {
    pub regex_mode: bool,
    pub audio_only: bool,
}

pub struct AppState {
    pub engine: SearchEngine<AlabamaProcessor>,
    pub modes: RwLock<SearchModes>,
    /// Generation of the last page sent to the UI; `:more`/`:back` move only that search
    pub shown_generation: AtomicU64,
}

impl AppState {
    pub fn new(config: Config, engine: SearchEngine<AlabamaProcessor>) -> Self {
        let modes = SearchModes {
            regex_mode: config.search.regex_mode,
            audio_only: config.search.audio_only,
        };

        Self {
            engine,
            modes: RwLock::new(modes),
            shown_generation: AtomicU64::new(0),
        }
    }
}
