//! CLI definitions for cssmin
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::VERSION;

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, option names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "cssmin")]
#[command(about = "Reads raw CSS from stdin, and writes compressed CSS to stdout.")]
#[command(
    long_about = "cssmin - compress CSS by rewriting its text.

Removes comments and unneeded whitespace, drops units from zero values,
shortens colors and numbers, and removes empty rules. The stylesheet is never
parsed into a tree; malformed CSS is passed through on a best-effort basis.

EXAMPLES:
    cssmin < style.css > style.min.css     Compress stdin to stdout
    cssmin style.css -o style.min.css      Compress a file into another file
    cssmin --wrap 200 < style.css          Break lines after ~200 characters

CONFIGURATION:
    Defaults are read from ~/.config/cssmin/config.toml:

        [minify]
        wrap = 200

LOGGING:
    Set CSSMIN_LOG=debug to trace each pass on stderr."
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Input stylesheet (reads stdin when omitted or `-`)
    #[arg(help = "Input CSS file (default: stdin)")]
    pub input: Option<PathBuf>,

    /// Wrap output to approximately N chars per line
    #[arg(
        long,
        short,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Wrap output to approximately N chars per line"
    )]
    pub wrap: Option<u64>,

    /// Write output to a file instead of stdout
    #[arg(long, short, value_name = "FILE", help = "Write output to FILE instead of stdout")]
    pub output: Option<PathBuf>,

    /// Load configuration from an explicit file
    #[arg(long, short, value_name = "FILE", help = "Load configuration from FILE")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", help = "Print a completion script for SHELL")]
    pub completions: Option<CompletionShell>,
}
