//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cart_cache::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Directory the cart is persisted in.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from config file and flags.
    pub fn load(
        config_path: Option<&str>,
        data_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let data_dir = data_dir
            .or_else(|| config.storage.data_dir.clone())
            .unwrap_or_else(default_data_dir);
        output.debug(&format!("data dir: {}", data_dir.display()));

        Ok(Self {
            config,
            output,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["cart.toml", ".cart.toml", "cart.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), "ignoring config: {e:#}"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the persistent backend.
    pub fn backend(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

/// `$HOME/.local/share/cart`, or a temp directory without `$HOME`.
fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share").join("cart")
    } else {
        std::env::temp_dir().join("cart")
    }
}
