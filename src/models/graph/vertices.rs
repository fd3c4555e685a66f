use super::Graph;
use crate::models::vertex::{Vertex, VertexId};

/// Extension trait for vertex-related operations on `Graph`
pub trait Vertices {
    /// Add a vertex if it doesn't exist, return its `VertexId`
    fn add_vertex(&mut self, name: &str) -> VertexId;

    /// Get a vertex by name
    fn vertex(&self, name: &str) -> Option<&Vertex>;

    /// Get a vertex by id
    fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex>;

    /// Get `VertexId` by name
    fn vertex_id(&self, name: &str) -> Option<VertexId>;

    /// All vertices in insertion order
    fn list_vertices(&self) -> indexmap::map::Values<'_, String, Vertex>;

    /// All vertex names in insertion order
    fn vertex_names(&self) -> indexmap::map::Keys<'_, String, Vertex>;

    fn vertex_count(&self) -> usize;
}

impl Vertices for Graph {
    fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(index) = self.vertices.get_index_of(name) {
            return VertexId::new(index);
        }
        let (index, _) = self.vertices.insert_full(name.to_string(), Vertex::new(name.to_string()));
        VertexId::new(index)
    }

    fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get_index(id.index()).map(|(_, vertex)| vertex)
    }

    fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertices.get_index_of(name).map(VertexId::new)
    }

    fn list_vertices(&self) -> indexmap::map::Values<'_, String, Vertex> {
        self.vertices.values()
    }

    fn vertex_names(&self) -> indexmap::map::Keys<'_, String, Vertex> {
        self.vertices.keys()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::undirected();
        let first = graph.add_vertex("Station A");
        let second = graph.add_vertex("Station A");

        assert_eq!(first, second);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_lookup() {
        let mut graph = Graph::undirected();
        let idx = graph.add_vertex("Station A");

        assert_eq!(graph.vertex_id("Station A"), Some(idx));
        assert_eq!(graph.vertex("Station A").map(Vertex::name), Some("Station A"));
        assert_eq!(graph.vertex_by_id(idx).map(Vertex::name), Some("Station A"));
        assert!(graph.vertex("Station Z").is_none());
        assert!(graph.vertex_id("Station Z").is_none());
    }

    #[test]
    fn test_list_vertices_in_insertion_order() {
        let mut graph = Graph::undirected();
        graph.add_vertex("Station C");
        graph.add_vertex("Station A");
        graph.add_vertex("Station B");
        graph.add_vertex("Station A");

        let names: Vec<&str> = graph.list_vertices().map(Vertex::name).collect();
        assert_eq!(names, vec!["Station C", "Station A", "Station B"]);

        let keys: Vec<&String> = graph.vertex_names().collect();
        assert_eq!(keys, vec!["Station C", "Station A", "Station B"]);
    }

    #[test]
    fn test_ids_follow_insertion_position() {
        let mut graph = Graph::directed();
        let a = graph.add_vertex("Station A");
        let b = graph.add_vertex("Station B");

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
    }
}
