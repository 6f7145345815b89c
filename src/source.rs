//! Reading stylesheets and writing minified output.
//!
//! Input comes from a file or, when no file (or `-`) is given, the whole of
//! stdin. Output goes verbatim to a file or stdout, without a trailing newline.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Where the stylesheet is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Build from an optional CLI path; `-` means stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }

    /// Human-readable origin used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Read the full stylesheet into memory.
    pub fn read(&self) -> Result<String, SourceError> {
        let bytes = match self {
            Input::Stdin => {
                let mut buffer = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buffer)
                    .map_err(|source| self.read_error(source))?;
                buffer
            }
            Input::File(path) => fs::read(path).map_err(|source| self.read_error(source))?,
        };

        decode(bytes, &self.describe())
    }

    fn read_error(&self, source: io::Error) -> SourceError {
        SourceError::Read {
            origin: self.describe(),
            source,
        }
    }
}

/// Write minified CSS to `output`, or stdout when `None`.
pub fn write_output(css: &str, output: Option<&Path>) -> Result<(), SourceError> {
    match output {
        Some(path) => fs::write(path, css).map_err(|source| SourceError::Write {
            target: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(css.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(SourceError::Stdout)
        }
    }
}

/// Decode input bytes as UTF-8.
fn decode(bytes: Vec<u8>, origin: &str) -> Result<String, SourceError> {
    String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
        origin: origin.to_string(),
    })
}
