//! Minify command handler
//!
//! Reads a stylesheet, runs the minification pipeline and writes the result.

use std::path::Path;

use anyhow::{Context, Result};

use cssmin::source::{write_output, Input};
use cssmin::{minify, Config};

/// Load configuration from an explicit path, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Handle the default command: minify input into output.
///
/// Wrap width priority: CLI argument > config file > none.
pub fn handle(
    input: Option<&Path>,
    output: Option<&Path>,
    wrap: Option<u64>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let cli_wrap = wrap.map(|w| usize::try_from(w).unwrap_or(usize::MAX));
    let options = config.minify_options(cli_wrap);

    let input = Input::from_arg(input);
    let css = input.read()?;
    tracing::debug!(origin = %input.describe(), bytes = css.len(), wrap = ?options.wrap, "Read stylesheet");

    let minified = minify::exec(&css, &options);

    write_output(&minified, output).with_context(|| "Could not write minified CSS")?;
    Ok(())
}
