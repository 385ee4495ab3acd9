//! Region boundary tracing
//!
//! Walks the pixel-corner lattice along unit edges that separate a region
//! from everything else, producing a closed loop of corner coordinates.

use glam::DVec2;

use crate::error::{Result, TerritoryError};
use crate::grid::{LabelGrid, RegionId};

/// Whether the unit edge leaving corner `(x, y)` in direction `(dx, dy)`
/// separates `region` from the rest of the grid
///
/// Exactly one of the two pixels on either side of the edge must belong to
/// the region. Pixels outside the grid never belong, and an edge that lies
/// outside the grid is never a boundary edge.
fn has_edge(
    grid: &LabelGrid,
    region: RegionId,
    x: isize,
    y: isize,
    dx: isize,
    dy: isize,
) -> bool {
    let width = grid.width() as isize;
    let height = grid.height() as isize;
    let inside = |px: isize, py: isize| {
        px >= 0
            && py >= 0
            && px < width
            && py < height
            && grid.get(px as usize, py as usize) == region
    };

    if dy == 0 {
        let column = if dx > 0 { x } else { x - 1 };
        column >= 0 && column < width && inside(column, y - 1) != inside(column, y)
    } else {
        let row = if dy > 0 { y } else { y - 1 };
        row >= 0 && row < height && inside(x - 1, row) != inside(x, row)
    }
}

/// Number of unit edges in the corner lattice of `grid`
#[inline]
fn unit_edge_count(grid: &LabelGrid) -> usize {
    let (w, h) = (grid.width(), grid.height());
    w * (h + 1) + h * (w + 1)
}

/// Trace the boundary of `region` starting from its outer edge
///
/// `start` must be the first pixel of the region in row-major order; the
/// walk begins at its top-left corner heading +x. At every corner the next
/// direction is chosen in the order straight, `(dy, -dx)`, `(-dy, dx)`.
///
/// The returned loop is implicitly closed: the last vertex is one unit step
/// away from the first. Every step, the closing one included, runs along a
/// boundary edge of the region.
///
/// Where the region touches itself only corner to corner, going straight
/// wins over turning, so the walk crosses the pinch and may continue along
/// the boundary of an enclosed hole before returning to the outer edge. The
/// shared corner then appears twice and the loop is not simple, so its
/// shoelace area need not equal the region's pixel count. Holes that the
/// region does not pinch against are not traced.
///
/// # Errors
///
/// - `NoEdgeToFollow` if the walk reaches a corner without a boundary edge
///   to continue along (including a bad start pixel)
/// - `ContourNotClosed` if the walk outgrows the number of unit edges in the
///   grid without returning to the start
pub fn trace_region(
    grid: &LabelGrid,
    region: RegionId,
    start: (usize, usize),
) -> Result<Vec<DVec2>> {
    let (sx, sy) = (start.0 as isize, start.1 as isize);
    let (mut x, mut y) = (sx, sy);
    let (mut dx, mut dy) = (1isize, 0isize);

    if !has_edge(grid, region, x, y, dx, dy) {
        return Err(TerritoryError::NoEdgeToFollow {
            region,
            x: start.0,
            y: start.1,
        });
    }

    let max_steps = unit_edge_count(grid);
    let mut vertices = Vec::new();

    loop {
        vertices.push(DVec2::new(x as f64, y as f64));
        if vertices.len() > max_steps {
            return Err(TerritoryError::ContourNotClosed {
                region,
                steps: vertices.len(),
            });
        }

        x += dx;
        y += dy;
        if x == sx && y == sy {
            break;
        }

        let turn = [(dx, dy), (dy, -dx), (-dy, dx)]
            .into_iter()
            .find(|&(cx, cy)| has_edge(grid, region, x, y, cx, cy));

        match turn {
            Some((nx, ny)) => {
                dx = nx;
                dy = ny;
            }
            None => {
                return Err(TerritoryError::NoEdgeToFollow {
                    region,
                    x: x as usize,
                    y: y as usize,
                })
            }
        }
    }

    Ok(vertices)
}
