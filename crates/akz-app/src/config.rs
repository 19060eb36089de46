use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use akz_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Explicit config file, else `./config.json`, else env-derived defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return read_config(default_path);
    }

    tracing::info!("No config file, using defaults");
    Ok(Config::new())
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
