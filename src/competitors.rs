use std::fs;
use std::path::Path;

use crate::error::{KinchError, KinchResult};

/// Read WCA IDs from a plain text file, one per line.
///
/// Order is preserved and duplicates are kept. Lines are trimmed and blank
/// lines skipped; identifiers are not otherwise validated.
pub fn read_competitors(path: &Path) -> KinchResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| KinchError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
