use crate::application::config::StorageConfig;
use crate::error::AppError;
use crate::presentation::instrument::InstrumentCollection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON snapshot of the account's instruments
///
/// The file is written for external inspection only; the client always works
/// from its in-memory copy.
#[derive(Debug, Clone)]
pub struct InstrumentStore {
    path: PathBuf,
}

impl InstrumentStore {
    /// Store backed by an explicit file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at `{data_path}/{instruments_file}`
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.instruments_path())
    }

    /// Location of the snapshot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the collection as a pretty-printed name → instrument object
    ///
    /// Missing parent directories are created.
    pub fn save(&self, instruments: &InstrumentCollection) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(instruments)?;
        fs::write(&self.path, json)?;
        info!(
            "Saved {} instruments to {}",
            instruments.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads a snapshot written by [`InstrumentStore::save`]
    pub fn load(&self) -> Result<InstrumentCollection, AppError> {
        let content = fs::read_to_string(&self.path)?;
        let instruments: InstrumentCollection = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} instruments from {}",
            instruments.len(),
            self.path.display()
        );
        Ok(instruments)
    }

    /// True when a snapshot exists on disk
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}
