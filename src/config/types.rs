//! Configuration type definitions and defaults

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub minify: MinifyConfig,
}

/// Minification defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MinifyConfig {
    /// Wrap output to approximately this many characters per line
    #[serde(default)]
    pub wrap: Option<usize>,
}

impl MinifyConfig {
    /// Validate minify settings.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.wrap {
            return Err("minify.wrap must be > 0".to_string());
        }
        Ok(())
    }
}
