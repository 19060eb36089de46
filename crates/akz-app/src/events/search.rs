use std::sync::atomic::Ordering;

use akz_core::{DictionaryEntry, Query, SearchPage};
use akz_lang_alabama::inflection::principal_parts;
use akz_types::{AppEvent, DisplayResult, ResultPage};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_search_text(
    state: &AppState,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let modes = *state.modes.read().await;
    let query = Query {
        text,
        regex_mode: modes.regex_mode,
        audio_only: modes.audio_only,
    };

    let event = match state.engine.search(&query) {
        Ok(page) => {
            tracing::debug!("Search {:?}: {} results", query.text, page.total);
            state
                .shown_generation
                .store(page.generation, Ordering::Release);
            AppEvent::ShowResults(result_page(&page))
        }
        Err(e) => AppEvent::SearchFailed(e.to_string()),
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}

pub async fn handle_advance(
    state: &AppState,
    delta: isize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let generation = state.shown_generation.load(Ordering::Acquire);
    if let Some(page) = state.engine.advance(generation, delta) {
        app_to_ui_tx
            .send(AppEvent::ShowResults(result_page(&page)))
            .await?;
        return Ok(());
    }

    // Another search replaced the shown one; resync the UI on the current window
    let page = state.engine.current();
    state
        .shown_generation
        .store(page.generation, Ordering::Release);
    app_to_ui_tx
        .send(AppEvent::StatusUpdate(
            "results changed since the last page, showing the latest search".to_string(),
        ))
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowResults(result_page(&page)))
        .await?;
    Ok(())
}

pub fn result_page(page: &SearchPage<'_>) -> ResultPage {
    ResultPage {
        results: page.entries.iter().copied().map(display_result).collect(),
        cursor: page.cursor,
        total: page.total,
    }
}

fn display_result(entry: &DictionaryEntry) -> DisplayResult {
    DisplayResult {
        lemma: entry.lemma.clone(),
        word_class: entry.word_class.clone(),
        derivation: entry.derivation.clone(),
        definition: entry.definition.clone(),
        principal_parts: principal_parts(entry)
            .into_iter()
            .map(|p| (p.form, p.person.as_str().to_string()))
            .collect(),
        has_audio: entry.has_audio(),
    }
}
