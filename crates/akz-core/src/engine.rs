use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use akz_config::search::SearchConfig;

use crate::dictionary::DictionaryEntry;
use crate::error::SearchError;
use crate::filter::{Matcher, filter};
use crate::keys::{EntryKeys, build_keys};
use crate::language::LanguageProcessor;
use crate::query::{Needle, Query};
use crate::rank::rank;
use crate::window::{ResultWindow, WindowState};

/// Search, filter and ranking engine over a read-only entry collection.
///
/// The collection and its keys never change after construction. The result window is the
/// only mutable state; every search and advance goes through one lock, so the latest
/// search always owns the window.
pub struct SearchEngine<P> {
    processor: P,
    entries: Arc<[DictionaryEntry]>,
    keys: Vec<EntryKeys>,
    session: Mutex<Session>,
}

struct Session {
    window: ResultWindow,
    /// Bumped by every successful search; 0 before the first one
    generation: u64,
}

/// The visible slice of the current ranked list
#[derive(Debug, Clone)]
pub struct SearchPage<'a> {
    pub entries: Vec<&'a DictionaryEntry>,
    pub cursor: usize,
    pub total: usize,
    pub generation: u64,
    pub state: WindowState,
}

impl SearchPage<'_> {
    pub fn has_more(&self) -> bool {
        self.cursor + self.entries.len() < self.total
    }
}

impl<P: LanguageProcessor> SearchEngine<P> {
    pub fn new(
        processor: P,
        entries: impl Into<Arc<[DictionaryEntry]>>,
        config: &SearchConfig,
    ) -> Self {
        Self::with_page_size(processor, entries, config.effective_page_size())
    }

    pub fn with_page_size(
        processor: P,
        entries: impl Into<Arc<[DictionaryEntry]>>,
        page_size: usize,
    ) -> Self {
        let entries = entries.into();
        let started = Instant::now();
        let keys = build_keys(&entries, &processor);
        tracing::info!(
            "Indexed {} entries for '{}' in {:?}",
            entries.len(),
            processor.language_code(),
            started.elapsed()
        );

        Self {
            processor,
            entries,
            keys,
            session: Mutex::new(Session {
                window: ResultWindow::new(page_size),
                generation: 0,
            }),
        }
    }

    /// Run a query and rewind the window to its first page.
    ///
    /// A pattern that fails to compile leaves the previous window untouched.
    pub fn search(&self, query: &Query) -> Result<SearchPage<'_>, SearchError> {
        let started = Instant::now();
        let matcher = Matcher::new(query, &self.processor).inspect_err(|e| {
            tracing::warn!("Rejected search: {}", e);
        })?;

        let mut session = self.lock_session();

        let mut candidates = filter(&self.entries, &self.keys, &matcher, query.audio_only);
        let needle = Needle::new(query, &self.processor);
        rank(&mut candidates, &self.keys, &needle);

        session.generation += 1;
        session.window.reset(candidates);

        tracing::debug!(
            "Search {:?} (regex: {}, audio only: {}) -> {} candidates in {:?}",
            query.text,
            query.regex_mode,
            query.audio_only,
            session.window.total(),
            started.elapsed()
        );

        Ok(self.page(&session))
    }

    /// Move the window by `delta` entries, but only if `generation` is still the latest search.
    ///
    /// A page from an older search cannot move the window of a newer one.
    pub fn advance(&self, generation: u64, delta: isize) -> Option<SearchPage<'_>> {
        let mut session = self.lock_session();
        if session.generation != generation {
            tracing::warn!(
                "Ignoring advance for stale search {} (current {})",
                generation,
                session.generation
            );
            return None;
        }
        session.window.advance(delta);
        Some(self.page(&session))
    }

    /// Current window without moving it
    pub fn current(&self) -> SearchPage<'_> {
        let session = self.lock_session();
        self.page(&session)
    }

    /// First entry whose lemma is exactly `lemma`
    pub fn lookup(&self, lemma: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|e| e.lemma == lemma)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.lock_session().window.page_size()
    }

    fn page(&self, session: &Session) -> SearchPage<'_> {
        let window = &session.window;
        SearchPage {
            entries: window.visible().iter().map(|&idx| &self.entries[idx]).collect(),
            cursor: window.cursor(),
            total: window.total(),
            generation: session.generation,
            state: window.state(),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        // Session updates are single assignments; a panic elsewhere cannot leave it half-written
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
