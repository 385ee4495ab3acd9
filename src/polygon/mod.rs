//! Region polygons
//!
//! Traces each region's boundary on the pixel-corner lattice and simplifies
//! it into a compact closed polygon.

mod contour;
mod simplify;

pub use contour::trace_region;
pub use simplify::{simplify, simplify_indices};

use glam::DVec2;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::LabelGrid;

/// Closed polygon of pixel-corner coordinates
///
/// The loop is implicit: the last vertex connects back to the first.
/// Vertices follow the traced boundary, starting at the top-left corner of
/// the region's first pixel in row-major order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<DVec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<DVec2>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<DVec2> {
        self.vertices
    }

    /// Enclosed area (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| self.vertices[i].perp_dot(self.vertices[(i + 1) % n]))
            .sum();
        twice_area.abs() / 2.0
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Interleaved coordinates `[x0, y0, x1, y1, ...]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_voronoi_territories::{DVec2, Polygon};
    ///
    /// let square = Polygon::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(2.0, 0.0),
    ///     DVec2::new(2.0, 2.0),
    ///     DVec2::new(0.0, 2.0),
    /// ]);
    /// assert_eq!(square.flatten(), vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0]);
    /// assert_eq!(square.area(), 4.0);
    /// ```
    pub fn flatten(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }
}

/// Trace and simplify the polygon of every region `0..region_count`
///
/// Index `i` of the result is region `i`. Regions without pixels get an
/// empty polygon.
///
/// # Errors
///
/// Propagates `NoEdgeToFollow` and `ContourNotClosed` from the tracer.
pub fn extract_polygons(
    grid: &LabelGrid,
    region_count: usize,
    tolerance: f64,
) -> Result<Vec<Polygon>> {
    let width = grid.width() as f64;
    let height = grid.height() as f64;

    grid.region_starts(region_count)
        .into_iter()
        .enumerate()
        .map(|(region, start)| -> Result<Polygon> {
            let Some(start) = start else {
                return Ok(Polygon::default());
            };
            let traced = trace_region(grid, region, start)?;
            let simplified = simplify(&traced, tolerance, width, height);
            trace!(
                region,
                traced = traced.len(),
                kept = simplified.len(),
                "simplified region polygon"
            );
            Ok(Polygon::new(simplified))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_bounds() {
        let polygon = Polygon::new(vec![
            DVec2::new(1.0, 1.0),
            DVec2::new(4.0, 1.0),
            DVec2::new(4.0, 3.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(1.0, 2.0),
        ]);

        assert_eq!(polygon.area(), 5.0);
        assert_eq!(
            polygon.bounds(),
            Some((DVec2::new(1.0, 1.0), DVec2::new(4.0, 3.0)))
        );
    }

    #[test]
    fn test_empty_polygon() {
        let polygon = Polygon::default();
        assert!(polygon.is_empty());
        assert_eq!(polygon.area(), 0.0);
        assert_eq!(polygon.bounds(), None);
        assert!(polygon.flatten().is_empty());
    }

    #[test]
    fn test_extract_polygons_covers_grid() {
        let grid = LabelGrid::from_rows(&[
            vec![0, 0, 1, 1],
            vec![0, 0, 1, 1],
            vec![2, 2, 2, 2],
        ])
        .unwrap();

        let polygons = extract_polygons(&grid, 3, 0.0).unwrap();

        assert_eq!(polygons.len(), 3);
        let areas: Vec<f64> = polygons.iter().map(Polygon::area).collect();
        assert_eq!(areas, vec![4.0, 4.0, 4.0]);
        assert_eq!(
            polygons[1].vertices(),
            &[
                DVec2::new(2.0, 0.0),
                DVec2::new(4.0, 0.0),
                DVec2::new(4.0, 2.0),
                DVec2::new(2.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_traced_area_matches_pixel_count() {
        let grid = LabelGrid::from_rows(&[
            vec![0, 0, 0, 1, 1],
            vec![0, 1, 1, 1, 1],
            vec![0, 0, 1, 1, 2],
            vec![0, 0, 0, 2, 2],
        ])
        .unwrap();

        let polygons = extract_polygons(&grid, 3, 0.0).unwrap();
        let sizes = grid.region_sizes(3);
        for (polygon, size) in polygons.iter().zip(sizes) {
            assert_eq!(polygon.area(), size as f64);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_polygon_serialization() {
        let polygon = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ]);
        let json = serde_json::to_string(&polygon).unwrap();
        let restored: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(polygon, restored);
    }
}
