mod graph;
mod vertex;

pub use graph::{EdgeRecord, Edges, Graph, Vertices};
pub use vertex::{Vertex, VertexId, Weight, DEFAULT_WEIGHT};

/// Total weight of a route
pub type Cost = u64;
