//! Writer for part files.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};
use crate::splitting::RoutedPart;

/// Write one part to `output_dir`, creating or overwriting its file.
///
/// The destination is opened in place and truncated, so a symlink keeps
/// pointing where it did and an existing file keeps its permissions.
///
/// # Returns
/// Path to the written file
pub fn write_part(part: &RoutedPart, output_dir: &Path) -> Result<PathBuf> {
    let output_file = output_dir.join(part.file_name());

    write_file(&output_file, part.contents.as_bytes()).map_err(|e| {
        SplitterError::WritePart {
            path: output_file.clone(),
            source: e,
        }
    })?;

    tracing::debug!(
        path = %output_file.display(),
        bytes = part.contents.len(),
        "Wrote part {}",
        part.part()
    );

    Ok(output_file)
}

/// Write parts one after another, stopping at the first failure.
///
/// Files written before the failure are kept.
pub fn write_parts(parts: &[RoutedPart], output_dir: &Path) -> Result<Vec<PathBuf>> {
    parts
        .iter()
        .map(|part| write_part(part, output_dir))
        .collect()
}

fn write_file(output_file: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(output_file)?;
    file.write_all(bytes)?;
    file.sync_all() // Ensure data is flushed to disk
}
