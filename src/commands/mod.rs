//! Command handlers for the cssmin CLI.
//!
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod minify;
