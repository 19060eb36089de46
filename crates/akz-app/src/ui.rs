use akz_types::{AppEvent, EntryDetail, ResultPage, UiEvent};
use kanal::AsyncReceiver;

/// Prints everything the event loop publishes
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::BackendReady => {
                println!("Enter an Alabama or English word (:quit to exit)");
            }
            AppEvent::ShowResults(page) => print!("{}", render_page(&page)),
            AppEvent::ShowEntry(detail) => print!("{}", render_detail(&detail)),
            AppEvent::SearchFailed(message) => println!("search failed: {message}"),
            AppEvent::StatusUpdate(message) => println!("{message}"),
            AppEvent::UiEvent(UiEvent::Close) => break,
            AppEvent::UiEvent(_) => {}
        }
    }

    tracing::debug!("UI loop finished");
    Ok(())
}

pub fn render_page(page: &ResultPage) -> String {
    if page.total == 0 {
        return "no results\n".to_string();
    }

    let mut lines = Vec::new();
    for result in &page.results {
        let mut heading = result.lemma.clone();
        if let Some(class) = &result.word_class {
            heading.push_str(&format!(" [{class}]"));
        }
        if result.has_audio {
            heading.push_str(" ♪");
        }
        lines.push(heading);

        if let Some(derivation) = &result.derivation {
            lines.push(format!("  {derivation}"));
        }
        lines.push(format!("  {}", result.definition));
        lines.extend(
            result
                .principal_parts
                .iter()
                .map(|(form, person)| format!("    {form:<20} {person}")),
        );
    }

    let shown_to = page.cursor + page.results.len();
    lines.push(format!(
        "-- {}-{} of {} --",
        (page.cursor + 1).min(shown_to),
        shown_to,
        page.total
    ));
    to_block(lines)
}

pub fn render_detail(detail: &EntryDetail) -> String {
    let mut lines = vec![detail.lemma.clone()];
    if let Some(negative) = &detail.negative_stem {
        lines.push(format!("  Negative stem: {negative}"));
    }

    for (idx, sense) in detail.senses.iter().enumerate() {
        if let Some(label) = &sense.label {
            lines.push(format!("  {label}"));
        }
        lines.push(format!("  {}. {}", idx + 1, sense.text));
    }

    if !detail.stems.is_empty() {
        lines.push("Inflectional Stems".to_string());
        lines.extend(
            detail
                .stems
                .iter()
                .map(|(form, person)| format!("  {form:<20} {person}")),
        );
    }

    if !detail.sentences.is_empty() {
        lines.push("Example Sentences".to_string());
        for (example, translation) in &detail.sentences {
            lines.push(format!("  {example}"));
            lines.push(format!("  {translation}"));
        }
    }

    if let Some(notes) = &detail.notes {
        lines.push(format!("Notes: {notes}"));
    }
    if !detail.related_terms.is_empty() {
        lines.push(format!("Related: {}", detail.related_terms.join(", ")));
    }
    to_block(lines)
}

/// One line per entry, newline-terminated
fn to_block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
