/// Failures a search invocation can report.
///
/// Filtering and ranking are total; only pattern compilation can fail.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        /// Pattern as the user typed it
        pattern: String,
        /// Pattern after `C`/`V` expansion
        translated: String,
        #[source]
        source: regex::Error,
    },
}
