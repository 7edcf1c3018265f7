//! Loading the combined setup document.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};

/// Where the setup document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read everything from standard input.
    Stdin,
    /// Read a file.
    File(PathBuf),
}

impl InputSource {
    /// Build a source from an optional CLI path; no path or `-` means stdin.
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => Self::File(p.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Path used in error messages.
    #[must_use]
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("<stdin>"),
            Self::File(path) => path.clone(),
        }
    }
}

/// Read the whole document into memory.
///
/// Input must be UTF-8; anything else fails the run.
pub fn read_content(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => read_from(std::io::stdin().lock(), source),
        InputSource::File(path) => {
            fs::read_to_string(path).map_err(|e| SplitterError::ReadInput {
                path: path.clone(),
                source: e,
            })
        }
    }
}

fn read_from<R: Read>(mut reader: R, source: &InputSource) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| SplitterError::ReadInput {
            path: source.display_path(),
            source: e,
        })?;
    Ok(content)
}
