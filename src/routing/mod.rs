pub mod journey;
pub mod nearest;
pub mod shortest_path;

pub use journey::{plan_journey, Journey};
pub use nearest::{build_coordinate_index, nearest, CoordinateIndex, StationPosition};
pub use shortest_path::{shortest_path, Route};
