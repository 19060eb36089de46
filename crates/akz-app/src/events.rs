use std::sync::Arc;

use akz_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod detail;
pub mod search;

use detail::handle_select;
use search::{handle_advance, handle_search_text};

/// App's main loop; returns once the user closes the session
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!(
        "[EVENT_LOOP] Ready with {} entries",
        state.engine.len()
    );
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;

        if let AppEvent::UiEvent(UiEvent::Close) = event {
            tracing::info!("[EVENT_LOOP] Close requested");
            app_to_ui_tx.send(event).await?;
            return Ok(());
        }

        handle_events(&state, &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(UiEvent::SearchText(text)) => {
            handle_search_text(state, text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Advance(delta)) => {
            handle_advance(state, delta, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SelectResult(lemma)) => {
            handle_select(state, &lemma, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SetRegexMode(enabled)) => {
            state.modes.write().await.regex_mode = enabled;
            tracing::debug!("Regex mode: {}", enabled);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!(
                    "regular expression mode {}",
                    on_off(enabled)
                )))
                .await?;
        }
        AppEvent::UiEvent(UiEvent::SetAudioOnly(enabled)) => {
            state.modes.write().await.audio_only = enabled;
            tracing::debug!("Audio only: {}", enabled);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!(
                    "limit to entries with audio {}",
                    on_off(enabled)
                )))
                .await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {}
        // Output-side events, nothing to do in the backend
        AppEvent::ShowResults(_)
        | AppEvent::ShowEntry(_)
        | AppEvent::SearchFailed(_)
        | AppEvent::StatusUpdate(_)
        | AppEvent::BackendReady => {}
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
