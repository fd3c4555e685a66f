use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, RoutingError};

/// Lines that carry data, with their 1-based line numbers
///
/// Blank lines and lines starting with `#` are skipped.
pub fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Split a line on whitespace into exactly `N` fields
///
/// # Errors
/// Returns `RoutingError::MalformedInput` if the field count differs
pub fn split_fields<const N: usize>(line_number: usize, line: &str) -> Result<[&str; N]> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let found = fields.len();
    fields.try_into().map_err(|_| RoutingError::MalformedInput {
        line: line_number,
        message: format!("expected {N} fields, found {found}"),
    })
}

/// Parse a single field, naming it in the error
///
/// # Errors
/// Returns `RoutingError::MalformedInput` if the value does not parse
pub fn parse_field<T: FromStr>(line_number: usize, field: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| RoutingError::MalformedInput {
        line: line_number,
        message: format!("invalid {field} `{value}`"),
    })
}

/// Read a whole text file, keeping the path in the error
///
/// # Errors
/// Returns `RoutingError::Io` if the file cannot be read
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| RoutingError::Io {
        path: path.to_path_buf(),
        source,
    })
}
