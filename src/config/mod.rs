//! Configuration management for cssmin

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::minify::MinifyOptions;

impl Config {
    /// Get the config file path (~/.config/cssmin/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Build minification options, letting a CLI wrap width override the config.
    ///
    /// Priority order:
    /// 1. CLI argument (explicit user intent)
    /// 2. `[minify] wrap` from the config file
    /// 3. No wrapping
    pub fn minify_options(&self, cli_wrap: Option<usize>) -> MinifyOptions {
        MinifyOptions {
            wrap: cli_wrap.or(self.minify.wrap),
        }
    }
}
