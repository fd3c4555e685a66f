pub mod coordinates;
pub mod edge_list;
pub mod shared;

// Re-export commonly used items
pub use coordinates::{load_coordinate_index, parse_coordinates, read_polyline};
pub use edge_list::{build_directed_graph, build_graph, load_graph, parse_edge_list};
