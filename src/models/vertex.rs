use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use std::fmt;

/// Stable identifier of a vertex within its graph (its insertion position)
pub type VertexId = NodeIndex;

/// Traversal cost of a single edge
pub type Weight = u32;

/// Weight used when an edge is added without one
pub const DEFAULT_WEIGHT: Weight = 1;

/// A named station and its weighted outgoing connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    neighbors: IndexMap<VertexId, Weight>,
}

impl Vertex {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            neighbors: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert the edge to `other`, or overwrite its weight if it already exists
    pub fn add_or_update_neighbor(&mut self, other: VertexId, weight: Weight) {
        self.neighbors.insert(other, weight);
    }

    /// Neighbor ids in insertion order. The iterator is cheap to clone, so it
    /// can be restarted from any point.
    pub fn neighbors(&self) -> indexmap::map::Keys<'_, VertexId, Weight> {
        self.neighbors.keys()
    }

    /// Neighbor ids with the weight of the edge leading to each
    pub fn weighted_neighbors(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbors.iter().map(|(&id, &weight)| (id, weight))
    }

    #[must_use]
    pub fn is_neighbor(&self, other: VertexId) -> bool {
        self.neighbors.contains_key(&other)
    }

    #[must_use]
    pub fn weight_to(&self, other: VertexId) -> Option<Weight> {
        self.neighbors.get(&other).copied()
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
