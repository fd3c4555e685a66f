use serde::{Deserialize, Serialize};

use super::nearest::CoordinateIndex;
use super::shortest_path::{shortest_path, Route};
use crate::error::{Result, RoutingError};
use crate::geometry::{euclidean_distance, polyline_length};
use crate::models::Graph;

/// A trip from an arbitrary point: walk to the nearest station, then ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub start: (f64, f64),
    pub boarding: String,
    pub route: Route,
}

impl Journey {
    /// Points a renderer should visit in order: the start point, then every
    /// station on the route
    ///
    /// # Errors
    /// Returns `RoutingError::PositionNotFound` if a station on the route has
    /// no entry in `index`
    pub fn waypoints(&self, index: &CoordinateIndex) -> Result<Vec<(f64, f64)>> {
        let mut points = Vec::with_capacity(self.route.stations.len() + 1);
        points.push(self.start);
        for station in &self.route.stations {
            let position = index
                .position(station)
                .ok_or_else(|| RoutingError::PositionNotFound(station.clone()))?;
            points.push(position);
        }
        Ok(points)
    }

    /// Straight-line distance from the start point to the boarding station
    ///
    /// # Errors
    /// Returns `RoutingError::PositionNotFound` if the boarding station has no position
    pub fn walking_distance(&self, index: &CoordinateIndex) -> Result<f64> {
        let boarding = index
            .position(&self.boarding)
            .ok_or_else(|| RoutingError::PositionNotFound(self.boarding.clone()))?;
        Ok(euclidean_distance(self.start, boarding))
    }

    /// Length of the drawn path, walk included
    ///
    /// # Errors
    /// Returns `RoutingError::PositionNotFound` if a station on the route has no position
    pub fn drawn_length(&self, index: &CoordinateIndex) -> Result<f64> {
        Ok(polyline_length(&self.waypoints(index)?))
    }
}

/// Snap `start` to its nearest station and route from there to `destination`
///
/// # Errors
/// - `RoutingError::InvalidPoint` if `start` is not a finite point
/// - `RoutingError::EmptyDomain` if `index` is empty
/// - `RoutingError::VertexNotFound` if the snapped station or `destination` is not in `graph`
/// - `RoutingError::PathNotFound` if `destination` is unreachable
pub fn plan_journey(
    graph: &Graph,
    index: &CoordinateIndex,
    start: (f64, f64),
    destination: &str,
) -> Result<Journey> {
    let boarding = index.nearest(start)?;
    crate::log!("Boarding at {boarding} for ({}, {})", start.0, start.1);

    let route = shortest_path(graph, boarding, destination)?;

    Ok(Journey {
        start,
        boarding: boarding.to_string(),
        route,
    })
}
