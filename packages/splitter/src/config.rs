//! Configuration constants and validation functions for the splitter.

use std::path::Path;

use crate::error::{Result, SplitterError};

/// Keyword written between the delimiter and the fragment text.
///
/// [`DELIMITER`] already ends in `PART`, so a rebuilt header reads
/// `... SETUP - PARTPART1 OF 3`. Existing part files are laid out this way.
pub const PART_KEYWORD: &str = "PART";

/// Boundary between the parts of the combined setup document.
///
/// A banner rule line followed by the start of the part header. The split
/// consumes it whole.
pub const DELIMITER: &str = "-- ============================================================================\n-- LUNONEX DATABASE SETUP - PART";

/// Default output directory (the current working directory).
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Check that an output directory exists and is a directory.
///
/// Called before any input is read so a bad `--output` never leaves
/// half-finished work behind.
///
/// # Examples
/// ```
/// use lunonex_sql_splitter::config::validate_output_dir;
///
/// assert!(validate_output_dir(std::path::Path::new(".")).is_ok());
/// assert!(validate_output_dir(std::path::Path::new("does/not/exist")).is_err());
/// ```
pub fn validate_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Err(SplitterError::OutputDirMissing(output_dir.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(SplitterError::OutputNotDirectory(output_dir.to_path_buf()));
    }
    Ok(())
}
