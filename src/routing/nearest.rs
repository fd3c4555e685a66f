use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::geometry::euclidean_distance;

/// A named station position, as read from a coordinate file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPosition {
    pub name: String,
    pub position: (f64, f64),
}

/// Station name to screen position, in insertion order
///
/// Insertion order is what makes `nearest` reproducible: among stations at the
/// same distance, the one inserted first wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateIndex {
    positions: IndexMap<String, (f64, f64)>,
}

impl CoordinateIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a station's position. An existing station keeps its place in the order.
    pub fn insert(&mut self, name: impl Into<String>, position: (f64, f64)) {
        self.positions.insert(name.into(), position);
    }

    /// Merge another index into this one; later positions win
    pub fn merge(&mut self, other: CoordinateIndex) {
        self.positions.extend(other.positions);
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<(f64, f64)> {
        self.positions.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, (f64, f64))> + '_ {
        self.positions.iter().map(|(name, &position)| (name.as_str(), position))
    }

    /// Name of the station closest to `point`
    ///
    /// # Errors
    /// - `RoutingError::InvalidPoint` if either coordinate is NaN or infinite
    /// - `RoutingError::EmptyDomain` if the index holds no stations
    pub fn nearest(&self, point: (f64, f64)) -> Result<&str> {
        let (x, y) = point;
        // A NaN distance never compares less, so the first station would win
        if !x.is_finite() || !y.is_finite() {
            return Err(RoutingError::InvalidPoint { x, y });
        }

        let mut best: Option<(&str, f64)> = None;

        for (name, position) in self.iter() {
            let distance = euclidean_distance(point, position);
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((name, distance));
            }
        }

        best.map(|(name, _)| name).ok_or(RoutingError::EmptyDomain)
    }
}

impl FromIterator<StationPosition> for CoordinateIndex {
    fn from_iter<I: IntoIterator<Item = StationPosition>>(iter: I) -> Self {
        let mut index = Self::new();
        for entry in iter {
            index.insert(entry.name, entry.position);
        }
        index
    }
}

/// Build a coordinate index from parsed entries. Duplicate names keep the last position.
pub fn build_coordinate_index(entries: impl IntoIterator<Item = StationPosition>) -> CoordinateIndex {
    entries.into_iter().collect()
}

/// Name of the station in `index` closest to `point`
///
/// # Errors
/// Returns `RoutingError::InvalidPoint` for a non-finite point, or
/// `RoutingError::EmptyDomain` if the index holds no stations
pub fn nearest(index: &CoordinateIndex, point: (f64, f64)) -> Result<&str> {
    index.nearest(point)
}
