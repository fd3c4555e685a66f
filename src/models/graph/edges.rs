use serde::{Deserialize, Serialize};

use super::vertices::Vertices;
use super::Graph;
use crate::models::vertex::{Weight, DEFAULT_WEIGHT};

/// One weighted connection between two named stations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Extension trait for edge-related operations on `Graph`
pub trait Edges {
    /// Connect `origin` to `destination`, creating either vertex as needed.
    /// In an undirected graph the reverse edge is set too, unless it is a self-loop.
    fn add_edge(&mut self, origin: &str, destination: &str, weight: Weight);

    /// `add_edge` with the default weight
    fn connect(&mut self, origin: &str, destination: &str);

    /// Every edge of the graph. Undirected connections appear once, from the
    /// endpoint whose name sorts first.
    fn list_edges(&self) -> Vec<EdgeRecord>;

    fn edge_count(&self) -> usize;
}

impl Edges for Graph {
    fn add_edge(&mut self, origin: &str, destination: &str, weight: Weight) {
        let from = self.add_vertex(origin);
        let to = self.add_vertex(destination);

        if let Some((_, vertex)) = self.vertices.get_index_mut(from.index()) {
            vertex.add_or_update_neighbor(to, weight);
        }
        if !self.directed && from != to {
            if let Some((_, vertex)) = self.vertices.get_index_mut(to.index()) {
                vertex.add_or_update_neighbor(from, weight);
            }
        }
    }

    fn connect(&mut self, origin: &str, destination: &str) {
        self.add_edge(origin, destination, DEFAULT_WEIGHT);
    }

    fn list_edges(&self) -> Vec<EdgeRecord> {
        let mut edges = Vec::new();

        for origin in self.vertices.values() {
            for (neighbor, weight) in origin.weighted_neighbors() {
                let Some(destination) = self.vertex_by_id(neighbor) else {
                    continue;
                };
                if !self.directed && origin.name() > destination.name() {
                    continue;
                }
                edges.push(EdgeRecord::new(origin.name(), destination.name(), weight));
            }
        }

        edges
    }

    fn edge_count(&self) -> usize {
        self.list_edges().len()
    }
}
