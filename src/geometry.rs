/// Calculates the Euclidean distance between two points.
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Examples
/// ```
/// use metro_graph::geometry::euclidean_distance;
///
/// let d = euclidean_distance((0.0, 0.0), (3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    dx.hypot(dy)
}

/// Calculates the total length of a polyline.
///
/// Returns 0.0 for fewer than two points.
#[must_use]
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|pair| euclidean_distance(pair[0], pair[1]))
        .sum()
}
