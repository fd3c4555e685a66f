use indexmap::IndexMap;
use petgraph::graph::DiGraph;
use std::fmt;

use super::vertex::{Vertex, Weight};

mod edges;
mod vertices;

pub use edges::{EdgeRecord, Edges};
pub use vertices::Vertices;

/// A network of uniquely named stations, directed or undirected
///
/// Vertices live in insertion order and are never removed, so a vertex's
/// position doubles as its `VertexId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: IndexMap<String, Vertex>,
    directed: bool,
}

impl Graph {
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: IndexMap::new(),
            directed,
        }
    }

    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Export to a petgraph `DiGraph` for downstream analysis
    ///
    /// Node indices match this graph's vertex ids. Undirected connections are
    /// exported as one edge in each direction, self-loops once.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<String, Weight> {
        let mut graph = DiGraph::with_capacity(self.vertices.len(), self.vertices.len());

        for name in self.vertices.keys() {
            graph.add_node(name.clone());
        }

        for (index, vertex) in self.vertices.values().enumerate() {
            let origin = petgraph::graph::NodeIndex::new(index);
            for (neighbor, weight) in vertex.weighted_neighbors() {
                graph.add_edge(origin, neighbor, weight);
            }
        }

        graph
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.list_edges().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} / {}:{}", edge.origin, edge.destination, edge.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_fixed() {
        assert!(Graph::directed().is_directed());
        assert!(!Graph::undirected().is_directed());
        assert!(!Graph::default().is_directed());
    }

    #[test]
    fn test_display_lists_edges_once() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 2);
        graph.add_edge("B", "C", 3);

        assert_eq!(graph.to_string(), "A / B:2, B / C:3");
    }

    #[test]
    fn test_to_petgraph_mirrors_undirected_edges() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 2);
        graph.add_edge("C", "C", 1);

        let exported = graph.to_petgraph();
        assert_eq!(exported.node_count(), 3);
        // A->B, B->A and the self-loop once
        assert_eq!(exported.edge_count(), 3);

        let a = graph.vertex_id("A").expect("A should exist");
        let b = graph.vertex_id("B").expect("B should exist");
        assert_eq!(exported[a], "A");
        let edge = exported.find_edge(b, a).expect("reverse edge should exist");
        assert_eq!(exported[edge], 2);
    }

    #[test]
    fn test_to_petgraph_directed() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", 2);

        let exported = graph.to_petgraph();
        let a = graph.vertex_id("A").expect("A should exist");
        let b = graph.vertex_id("B").expect("B should exist");
        assert!(exported.find_edge(a, b).is_some());
        assert!(exported.find_edge(b, a).is_none());
    }
}
