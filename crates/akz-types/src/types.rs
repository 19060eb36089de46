use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Result page produced by a search or an advance
    ShowResults(ResultPage),
    /// Detail record for one entry
    ShowEntry(EntryDetail),
    /// Search rejected; the previous page stays authoritative
    SearchFailed(String),
    StatusUpdate(String),
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchText(String),
    SetRegexMode(bool),
    SetAudioOnly(bool),
    /// Move the result window; positive reveals more
    Advance(isize),
    SelectResult(String),
    Close,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultPage {
    pub results: Vec<DisplayResult>,
    pub cursor: usize,
    pub total: usize,
}

/// One row of the list view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayResult {
    pub lemma: String,
    pub word_class: Option<String>,
    pub derivation: Option<String>,
    pub definition: String,
    /// (form, person) pairs
    pub principal_parts: Vec<(String, String)>,
    pub has_audio: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDetail {
    pub lemma: String,
    pub negative_stem: Option<String>,
    pub senses: Vec<SenseLine>,
    /// (form, person) pairs of a -LI verb
    pub stems: Vec<(String, String)>,
    /// (Alabama, English) pairs
    pub sentences: Vec<(String, String)>,
    pub notes: Option<String>,
    pub related_terms: Vec<String>,
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenseLine {
    pub label: Option<String>,
    pub text: String,
}
