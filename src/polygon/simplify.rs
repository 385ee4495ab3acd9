//! Tolerance-based polygon simplification
//!
//! Greedy forward scan over a traced contour: from each anchor the run is
//! extended while every skipped vertex stays within the tolerance of the
//! line from the anchor to the candidate end.

use glam::DVec2;

/// Squared distance from `p` to the infinite line through `a` and `b`
///
/// Falls back to the squared distance from `p` to `a` when `a == b`.
#[inline]
fn line_distance_squared(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let direction = b - a;
    let length_sq = direction.length_squared();
    if length_sq == 0.0 {
        return (p - a).length_squared();
    }
    let cross = direction.perp_dot(p - a);
    cross * cross / length_sq
}

/// Whether vertex `index` sits on an image border line and has a neighbour
/// that leaves that line
///
/// Such vertices are where a territory meets the map edge and must survive
/// simplification.
fn is_pinned(vertices: &[DVec2], index: usize, width: f64, height: f64) -> bool {
    let n = vertices.len();
    let v = vertices[index];
    let prev = vertices[(index + n - 1) % n];
    let next = vertices[(index + 1) % n];

    let on_vertical = v.x == 0.0 || v.x == width;
    let on_horizontal = v.y == 0.0 || v.y == height;

    (on_vertical && (prev.x != v.x || next.x != v.x))
        || (on_horizontal && (prev.y != v.y || next.y != v.y))
}

/// Indices of the vertices that survive simplification, in loop order
///
/// Vertex 0 is always kept. From each anchor the candidate end advances
/// while all vertices strictly between anchor and candidate lie within
/// `tolerance` of the anchor→candidate line; the last valid candidate
/// becomes the next anchor. A pinned border vertex ends the run early and
/// becomes the next anchor itself. The closing run back to vertex 0 is
/// checked the same way.
///
/// If fewer than three vertices would remain, every index is returned.
pub fn simplify_indices(vertices: &[DVec2], tolerance: f64, width: f64, height: f64) -> Vec<usize> {
    let n = vertices.len();
    if n < 4 {
        return (0..n).collect();
    }

    let tolerance_sq = tolerance * tolerance;
    let exceeds = |anchor: usize, end: usize| {
        let target = vertices[end % n];
        (anchor + 1..end).any(|i| {
            line_distance_squared(vertices[i], vertices[anchor], target) > tolerance_sq
        })
    };

    let mut kept = Vec::new();
    let mut anchor = 0;

    loop {
        kept.push(anchor);

        let mut next = None;
        let mut end = anchor + 1;
        while end <= n {
            if exceeds(anchor, end) {
                next = Some(end - 1);
                break;
            }
            if end < n && is_pinned(vertices, end, width, height) {
                next = Some(end);
                break;
            }
            end += 1;
        }

        match next {
            Some(index) if index < n => anchor = index,
            _ => break,
        }
    }

    if kept.len() < 3 {
        return (0..n).collect();
    }
    kept
}

/// Simplify a closed polygon traced on a `width` × `height` grid
///
/// # Example
///
/// ```rust
/// use rust_voronoi_territories::polygon::simplify;
/// use rust_voronoi_territories::DVec2;
///
/// // A 2x2 square traced corner by corner
/// let traced: Vec<DVec2> = [
///     (0., 0.), (1., 0.), (2., 0.), (2., 1.),
///     (2., 2.), (1., 2.), (0., 2.), (0., 1.),
/// ]
///     .iter()
///     .map(|&(x, y)| DVec2::new(x, y))
///     .collect();
///
/// let simplified = simplify(&traced, 1.5, 2.0, 2.0);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn simplify(vertices: &[DVec2], tolerance: f64, width: f64, height: f64) -> Vec<DVec2> {
    simplify_indices(vertices, tolerance, width, height)
        .into_iter()
        .map(|i| vertices[i])
        .collect()
}
