use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 50;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SearchConfig {
    /// Entries revealed per window step
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Start in pattern mode (`C`/`V` shorthand regex over lemmas)
    #[serde(default)]
    pub regex_mode: bool,
    /// Start with the audio-only filter enabled
    #[serde(default)]
    pub audio_only: bool,
}

impl SearchConfig {
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            regex_mode: false,
            audio_only: false,
        }
    }
}
