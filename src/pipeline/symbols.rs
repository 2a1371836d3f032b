//! Identifier list parsing for the batch entry points.

use std::io;
use std::path::Path;

/// Split comma-separated identifiers, trimming each and dropping blanks.
pub fn parse_symbol_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One identifier per line; blank lines are skipped.
pub fn read_symbol_file(path: &Path) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}
