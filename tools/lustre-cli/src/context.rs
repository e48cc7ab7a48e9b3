//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use lustre_cache::Cache;
use lustre_commerce::catalog::Catalog;
use lustre_commerce::checkout::SimulatedGateway;
use lustre_commerce::Storefront;

use crate::config::{CliConfig, StorageBackend};
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["lustre.toml", ".lustre.toml", "lustre.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let path = find_config_file(start)?;
        match CliConfig::load(path.to_str()?) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Open the configured storage.
    pub fn cache(&self) -> Result<Cache> {
        match self.config.storage.backend {
            StorageBackend::Memory => {
                self.output.debug("Using in-memory storage; changes will not be kept");
                Ok(Cache::memory())
            }
            StorageBackend::File => {
                let dir = self.resolve_path(&self.config.storage.data_dir);
                self.output.debug(&format!("Using data directory {}", dir.display()));
                Cache::open_dir(&dir)
                    .with_context(|| format!("Failed to open data directory: {}", dir.display()))
            }
        }
    }

    /// Keys currently held by the configured storage, sorted.
    pub fn stored_keys(&self) -> Result<Vec<String>> {
        let mut keys = self.cache()?.keys().context("Failed to list stored keys")?;
        keys.sort();
        Ok(keys)
    }

    /// Open the session: bundled catalog plus the stored cart and wishlist.
    pub fn storefront(&self) -> Result<Storefront> {
        let catalog = Catalog::jewellery().context("Failed to load the bundled catalog")?;
        Ok(Storefront::open(catalog, self.cache()?))
    }

    /// Order gateway honoring the configured delay.
    pub fn gateway(&self) -> SimulatedGateway {
        SimulatedGateway::new(self.config.checkout.delay())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Walk up from `start` looking for a config file.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
