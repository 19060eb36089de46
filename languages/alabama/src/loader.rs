use std::path::Path;

use akz_core::dictionary::{DictionaryEntry, DictionaryLoader, LoadError};

use crate::dictionary::AlabamaDictionary;

pub struct AlabamaLoader;

impl AlabamaLoader {
    /// Parse dictionary data already in memory
    pub fn load_from_str(json: &str) -> Result<AlabamaDictionary, LoadError> {
        let dict = AlabamaDictionary::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_file(path: &Path) -> Result<AlabamaDictionary, LoadError> {
        tracing::info!("Loading Alabama dictionary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let dict = AlabamaDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load the primary dictionary, then append any additional ones that load.
    ///
    /// The primary file is required; additional files that fail are logged and skipped.
    pub fn load_all(primary: &Path, additional: &[String]) -> Result<AlabamaDictionary, LoadError> {
        let mut dict = Self::load_file(primary)?;

        for path in additional {
            match Self::load_file(Path::new(path)) {
                Ok(extra) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = dict.merge(extra);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Ok(dict)
    }
}

impl DictionaryLoader for AlabamaLoader {
    fn load_from_file(&self, path: &Path) -> Result<Vec<DictionaryEntry>, LoadError> {
        Self::load_file(path).map(AlabamaDictionary::into_entries)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["json".to_string()]
    }
}
