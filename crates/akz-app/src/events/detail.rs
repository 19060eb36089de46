use akz_core::DictionaryEntry;
use akz_lang_alabama::inflection::{inflectional_stems, negative_stem, senses, verb_class_label};
use akz_types::{AppEvent, EntryDetail, SenseLine};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_select(
    state: &AppState,
    lemma: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match state.engine.lookup(lemma) {
        Some(entry) => AppEvent::ShowEntry(entry_detail(state.engine.entries(), entry)),
        None => {
            tracing::debug!("No entry for lemma {:?}", lemma);
            AppEvent::StatusUpdate(format!("no entry named {lemma}"))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}

pub fn entry_detail(entries: &[DictionaryEntry], entry: &DictionaryEntry) -> EntryDetail {
    EntryDetail {
        lemma: entry.lemma.clone(),
        negative_stem: negative_stem(entries, &entry.lemma).map(|e| e.lemma.clone()),
        senses: senses(entry)
            .into_iter()
            .map(|sense| SenseLine {
                label: verb_class_label(entry, sense),
                text: sense.to_string(),
            })
            .collect(),
        stems: inflectional_stems(entry)
            .unwrap_or_default()
            .into_iter()
            .map(|s| (s.form, s.person.as_str().to_string()))
            .collect(),
        sentences: entry
            .sentences
            .iter()
            .map(|s| (s.example.clone(), s.translation.clone()))
            .collect(),
        notes: entry.notes.clone(),
        related_terms: entry.related_terms.clone().unwrap_or_default(),
        audio: entry.audio.clone(),
    }
}
