use std::path::Path;

use super::shared::{data_lines, parse_field, read_file, split_fields};
use crate::error::Result;
use crate::routing::{build_coordinate_index, CoordinateIndex, StationPosition};
use crate::stack::Stack;

/// Parse a station coordinate file: one `NAME X Y` entry per line, integer coordinates
///
/// # Errors
/// Returns `RoutingError::MalformedInput` for a line without exactly three
/// fields or with a non-integer coordinate
pub fn parse_coordinates(content: &str) -> Result<Vec<StationPosition>> {
    data_lines(content)
        .map(|(line_number, line)| {
            let [name, x, y] = split_fields::<3>(line_number, line)?;
            let x: i32 = parse_field(line_number, "x", x)?;
            let y: i32 = parse_field(line_number, "y", y)?;
            Ok(StationPosition {
                name: name.to_string(),
                position: (f64::from(x), f64::from(y)),
            })
        })
        .collect()
}

/// Read the positions of a line file onto a stack, in file order
///
/// Draining the stack replays the line from its last station back to its first.
///
/// # Errors
/// Returns `RoutingError::MalformedInput` if a line cannot be parsed
pub fn read_polyline(content: &str) -> Result<Stack<(f64, f64)>> {
    Ok(parse_coordinates(content)?
        .into_iter()
        .map(|entry| entry.position)
        .collect())
}

/// Read and merge coordinate files, typically one per metro line
///
/// A station listed in several files keeps its first position in the
/// iteration order and takes the coordinates from the last file.
///
/// # Errors
/// Returns `RoutingError::Io` if a file cannot be read, or
/// `RoutingError::MalformedInput` if a line cannot be parsed
pub fn load_coordinate_index<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<CoordinateIndex> {
    let mut index = CoordinateIndex::new();
    for path in paths {
        let path = path.as_ref();
        let entries = parse_coordinates(&read_file(path)?)?;
        crate::log!("Loaded {} station positions from {}", entries.len(), path.display());
        index.merge(build_coordinate_index(entries));
    }
    Ok(index)
}
