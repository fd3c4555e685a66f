#![allow(clippy::implicit_hasher)]

pub mod data;
pub mod error;
pub mod geometry;
pub mod import;
pub mod logging;
pub mod models;
pub mod routing;
pub mod stack;

pub use error::{Result, RoutingError};
pub use import::{build_graph, load_coordinate_index, load_graph};
pub use models::{Cost, EdgeRecord, Edges, Graph, Vertex, VertexId, Vertices, Weight};
pub use routing::{
    build_coordinate_index, nearest, plan_journey, shortest_path, CoordinateIndex, Journey, Route, StationPosition,
};
pub use stack::Stack;
