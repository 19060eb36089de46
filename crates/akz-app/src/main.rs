use std::path::{Path, PathBuf};
use std::sync::Arc;

use akz_core::SearchEngine;
use akz_lang_alabama::{AlabamaLoader, AlabamaProcessor};
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "akz")]
#[command(about = "Alabama-English dictionary lookup", long_about = None)]
struct Cli {
    /// Dictionary file (overrides the configured path)
    #[arg(short, long)]
    dict: Option<PathBuf>,
    /// JSON config file; defaults to ./config.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Entries shown per page
    #[arg(short = 'n', long)]
    page_size: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries results; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(dict) = cli.dict {
        config.dictionary.path = dict.display().to_string();
    }
    if let Some(page_size) = cli.page_size {
        config.search.page_size = page_size;
    }

    let dict = AlabamaLoader::load_all(
        Path::new(&config.dictionary.path),
        &config.dictionary.additional_paths,
    )?;
    let engine = SearchEngine::new(AlabamaProcessor::new(), dict.into_entries(), &config.search);

    let state = Arc::new(AppState::new(config, engine));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();

    Ok(())
}
