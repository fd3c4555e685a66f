use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Result, RoutingError};
use crate::models::{Cost, Graph, VertexId, Vertices};
use crate::stack::Stack;

/// An ordered list of stations and the total weight of travelling it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub stations: Vec<String>,
    pub cost: Cost,
}

impl Route {
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// Number of hops between consecutive stations
    #[must_use]
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    cost: Cost,
    vertex: VertexId,
}

// Reversed so the max-heap pops the smallest cost first; equal costs pop
// the smaller vertex id (earlier inserted) first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-weight route from `source` to `target`
///
/// Dijkstra's algorithm. The route is returned once `target` is taken off the
/// frontier, when its distance can no longer improve. Among vertices at equal
/// tentative distance, the one inserted into the graph first is settled first.
///
/// # Errors
/// - `RoutingError::VertexNotFound` if either name is not in the graph
/// - `RoutingError::PathNotFound` if `target` cannot be reached from `source`
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<Route> {
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| RoutingError::VertexNotFound(source.to_string()))?;
    let target_id = graph
        .vertex_id(target)
        .ok_or_else(|| RoutingError::VertexNotFound(target.to_string()))?;

    if source_id == target_id {
        return Ok(Route {
            stations: vec![source.to_string()],
            cost: 0,
        });
    }

    #[cfg(feature = "perf_timing")]
    let started = std::time::Instant::now();

    let count = graph.vertex_count();
    let mut distance: Vec<Option<Cost>> = vec![None; count];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; count];
    let mut settled = vec![false; count];
    let mut frontier = BinaryHeap::new();

    distance[source_id.index()] = Some(0);
    frontier.push(Candidate { cost: 0, vertex: source_id });

    while let Some(Candidate { cost, vertex }) = frontier.pop() {
        // Stale entry left behind by a later improvement
        if settled[vertex.index()] {
            continue;
        }
        settled[vertex.index()] = true;

        if vertex == target_id {
            let stations = reconstruct_route(graph, &predecessor, target_id)?;

            #[cfg(feature = "perf_timing")]
            crate::log!(
                "shortest_path {source} -> {target}: {:.3}ms",
                started.elapsed().as_secs_f64() * 1000.0
            );

            return Ok(Route { stations, cost });
        }

        let Some(current) = graph.vertex_by_id(vertex) else {
            continue;
        };

        for (neighbor, weight) in current.weighted_neighbors() {
            if settled[neighbor.index()] {
                continue;
            }
            let candidate = cost + Cost::from(weight);
            let improves = distance[neighbor.index()].map_or(true, |known| candidate < known);
            if improves {
                distance[neighbor.index()] = Some(candidate);
                predecessor[neighbor.index()] = Some(vertex);
                frontier.push(Candidate { cost: candidate, vertex: neighbor });
            }
        }
    }

    crate::log!("no path from {source} to {target}");
    Err(RoutingError::PathNotFound {
        from: source.to_string(),
        to: target.to_string(),
    })
}

/// Walk predecessor links back from `target`, then pop them into travel order
fn reconstruct_route(graph: &Graph, predecessor: &[Option<VertexId>], target: VertexId) -> Result<Vec<String>> {
    let mut backwards = Stack::new();
    let mut current = Some(target);

    while let Some(vertex) = current {
        let name = graph
            .vertex_by_id(vertex)
            .map(|v| v.name().to_string())
            .ok_or_else(|| RoutingError::VertexNotFound(format!("#{}", vertex.index())))?;
        backwards.push(name);
        current = predecessor[vertex.index()];
    }

    Ok(backwards.drain().collect())
}
