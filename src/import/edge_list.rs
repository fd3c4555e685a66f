use std::path::Path;

use super::shared::{data_lines, parse_field, read_file, split_fields};
use crate::error::Result;
use crate::models::{EdgeRecord, Edges, Graph};

/// Parse an edge list: one `ORIGIN DEST WEIGHT` triple per line
///
/// Empty lines and lines starting with `#` are skipped.
///
/// # Errors
/// Returns `RoutingError::MalformedInput` for a line without exactly three
/// fields or whose weight is not a non-negative integer
pub fn parse_edge_list(content: &str) -> Result<Vec<EdgeRecord>> {
    data_lines(content)
        .map(|(line_number, line)| {
            let [origin, destination, weight] = split_fields::<3>(line_number, line)?;
            let weight = parse_field(line_number, "weight", weight)?;
            Ok(EdgeRecord::new(origin, destination, weight))
        })
        .collect()
}

/// Build an undirected graph from edge records
pub fn build_graph(edges: impl IntoIterator<Item = EdgeRecord>) -> Graph {
    fill_graph(Graph::undirected(), edges)
}

/// Build a directed graph from edge records
pub fn build_directed_graph(edges: impl IntoIterator<Item = EdgeRecord>) -> Graph {
    fill_graph(Graph::directed(), edges)
}

fn fill_graph(mut graph: Graph, edges: impl IntoIterator<Item = EdgeRecord>) -> Graph {
    for edge in edges {
        graph.add_edge(&edge.origin, &edge.destination, edge.weight);
    }
    graph
}

/// Read an edge-list file into an undirected graph
///
/// # Errors
/// Returns `RoutingError::Io` if the file cannot be read, or
/// `RoutingError::MalformedInput` if a line cannot be parsed
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let edges = parse_edge_list(&content)?;
    crate::log!("Loaded {} edges from {}", edges.len(), path.display());
    Ok(build_graph(edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::models::Vertices;
    use std::collections::HashSet;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# orange line\n\nLIONEL-GROULX GEORGES-VANIER 2\n   \nGEORGES-VANIER   LUCIEN-L'ALLIER\t1\n";
        let edges = parse_edge_list(content).expect("content is well formed");

        assert_eq!(
            edges,
            vec![
                EdgeRecord::new("LIONEL-GROULX", "GEORGES-VANIER", 2),
                EdgeRecord::new("GEORGES-VANIER", "LUCIEN-L'ALLIER", 1),
            ]
        );
    }

    #[test]
    fn test_parse_reports_line_of_bad_field_count() {
        let content = "A B 1\n# comment\nA C\n";
        let err = parse_edge_list(content).expect_err("third line is missing a weight");

        assert!(matches!(err, RoutingError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_non_integer_weight() {
        assert!(matches!(
            parse_edge_list("A B 1.5\n"),
            Err(RoutingError::MalformedInput { line: 1, .. })
        ));
        assert!(matches!(
            parse_edge_list("A B -2\n"),
            Err(RoutingError::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn test_build_graph_is_undirected() {
        let graph = build_graph(vec![EdgeRecord::new("A", "B", 4)]);
        let a = graph.vertex_id("A").expect("A should exist");

        assert!(!graph.is_directed());
        assert_eq!(graph.vertex("B").and_then(|v| v.weight_to(a)), Some(4));
    }

    #[test]
    fn test_build_directed_graph() {
        let graph = build_directed_graph(vec![EdgeRecord::new("A", "B", 4)]);
        let a = graph.vertex_id("A").expect("A should exist");

        assert!(graph.is_directed());
        assert_eq!(graph.vertex("B").and_then(|v| v.weight_to(a)), None);
    }

    #[test]
    fn test_list_edges_reproduces_input() {
        let content = "B A 2\nB C 3\nC A 10\nD D 1\n";
        let edges = parse_edge_list(content).expect("content is well formed");
        let graph = build_graph(edges.clone());

        let normalize = |edge: &EdgeRecord| {
            let (a, b) = if edge.origin <= edge.destination {
                (edge.origin.clone(), edge.destination.clone())
            } else {
                (edge.destination.clone(), edge.origin.clone())
            };
            (a, b, edge.weight)
        };

        let expected: HashSet<_> = edges.iter().map(normalize).collect();
        let listed: HashSet<_> = graph.list_edges().iter().map(normalize).collect();
        assert_eq!(graph.list_edges().len(), expected.len());
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_load_graph_missing_file() {
        let err = load_graph("does/not/exist.txt").expect_err("file should not exist");
        assert!(matches!(err, RoutingError::Io { .. }));
    }
}
