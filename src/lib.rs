//! cssmin Library
//!
//! Compresses CSS source text by rewriting it pass by pass, without parsing
//! it into a syntax tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod minify;
pub mod source;

pub use config::Config;
pub use error::SourceError;
pub use minify::{minify, MinifyOptions};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
