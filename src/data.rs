use crate::error::Result;
use crate::import::{build_graph, parse_coordinates, parse_edge_list};
use crate::models::Graph;
use crate::routing::{build_coordinate_index, CoordinateIndex};

/// Edge list of the bundled sample network
pub const SAMPLE_NETWORK: &str = include_str!("../test-data/metro.txt");

/// Coordinate files of the bundled sample network, one per line, in drawing order
pub const SAMPLE_LINES: [(&str, &str); 3] = [
    ("orange", include_str!("../test-data/orange.txt")),
    ("green", include_str!("../test-data/green.txt")),
    ("yellow", include_str!("../test-data/yellow.txt")),
];

/// Parse the bundled sample network
///
/// # Errors
/// Returns `RoutingError::MalformedInput` if the bundled file is malformed
pub fn sample_graph() -> Result<Graph> {
    Ok(build_graph(parse_edge_list(SAMPLE_NETWORK)?))
}

/// Merge the bundled per-line coordinate files into one index
///
/// # Errors
/// Returns `RoutingError::MalformedInput` if a bundled file is malformed
pub fn sample_stations() -> Result<CoordinateIndex> {
    let mut index = CoordinateIndex::new();
    for (_, content) in SAMPLE_LINES {
        index.merge(build_coordinate_index(parse_coordinates(content)?));
    }
    Ok(index)
}
