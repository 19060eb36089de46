use akz_types::{AppEvent, UiEvent};
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Reads commands from stdin until EOF, `:quit` or cancellation
pub async fn watcher_io(
    page_size: usize,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("Stdin watcher stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::info!("Stdin closed");
            event_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(());
        };

        match parse_command(&line, page_size) {
            Ok(event) => {
                let close = event == UiEvent::Close;
                event_tx.send(AppEvent::UiEvent(event)).await?;
                if close {
                    return Ok(());
                }
            }
            Err(message) => {
                event_tx.send(AppEvent::StatusUpdate(message)).await?;
            }
        }
    }
}

/// Map one input line to a UI event.
///
/// Lines starting with `:` are commands; anything else is search text, sent as typed.
pub fn parse_command(line: &str, page_size: usize) -> Result<UiEvent, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return Ok(UiEvent::SearchText(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    let step = isize::try_from(page_size).unwrap_or(isize::MAX);

    match name {
        "re" | "regex" => parse_switch(arg).map(UiEvent::SetRegexMode),
        "audio" => parse_switch(arg).map(UiEvent::SetAudioOnly),
        "more" | "next" => parse_step(arg, step).map(UiEvent::Advance),
        "back" | "prev" => parse_step(arg, step).map(|n| UiEvent::Advance(-n)),
        "show" if !arg.is_empty() => Ok(UiEvent::SelectResult(arg.to_string())),
        "show" => Err("usage: :show <lemma>".to_string()),
        "q" | "quit" => Ok(UiEvent::Close),
        other => Err(format!(
            "unknown command :{other} (try :re, :audio, :more, :back, :show, :quit)"
        )),
    }
}

fn parse_switch(arg: &str) -> Result<bool, String> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(format!("expected on or off, got {arg:?}")),
    }
}

fn parse_step(arg: &str, default: isize) -> Result<isize, String> {
    if arg.is_empty() {
        return Ok(default);
    }
    arg.parse::<isize>()
        .map(|n| n.saturating_abs())
        .map_err(|_| format!("expected a number, got {arg:?}"))
}
