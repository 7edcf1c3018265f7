//! Main splitter service that ties splitting and writing together.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::splitting::{RoutedPart, SplitEngine};
use crate::writer::write_part;

/// A part that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPart {
    /// Part number (1-based).
    pub part: u8,
    /// Destination path.
    pub path: PathBuf,
}

/// Outcome of a split run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Parts in the order they were written.
    pub written: Vec<WrittenPart>,
}

impl SplitReport {
    /// Number of write operations performed.
    ///
    /// A destination hit twice counts twice.
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.written.len()
    }
}

/// Route the document without writing anything.
#[must_use]
pub fn plan(content: &str) -> Vec<RoutedPart> {
    SplitEngine::default().split(content)
}

/// Split a setup document and write its parts into `output_dir`.
///
/// Writes 0 to 3 distinct files. A missing marker is not an error, it just
/// produces no file. The first write failure aborts the run; files already
/// written stay in place.
///
/// # Arguments
/// * `content` - The full combined setup document
/// * `output_dir` - Directory receiving the part files
///
/// # Returns
/// A `SplitReport` listing every file written
pub fn split_and_route(content: &str, output_dir: &Path) -> Result<SplitReport> {
    split_and_route_with(content, output_dir, |_| {})
}

/// Like [`split_and_route`], calling `on_written` after each file lands.
pub fn split_and_route_with<F>(
    content: &str,
    output_dir: &Path,
    mut on_written: F,
) -> Result<SplitReport>
where
    F: FnMut(&WrittenPart),
{
    let mut report = SplitReport::default();

    for part in plan(content) {
        let path = write_part(&part, output_dir)?;
        let written = WrittenPart {
            part: part.part(),
            path,
        };
        on_written(&written);
        report.written.push(written);
    }

    Ok(report)
}
