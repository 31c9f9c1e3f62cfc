//! Shared configuration handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Cloneable handle to the active configuration.
///
/// Readers get a snapshot; `reload` swaps the whole config at once and
/// keeps the previous one when the file no longer loads.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        tracing::info!(path = %self.path.display(), "Configuration reloaded");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
