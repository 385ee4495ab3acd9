//! Connected-component repair
//!
//! The perturbed distance is not a true metric, so the cells nearest to one
//! site can form several disconnected islands. This stage gives every
//! 4-connected island its own label and then renumbers labels densely.

use crate::grid::{LabelGrid, RegionId};

/// Array-backed disjoint-set forest with path compression
#[derive(Debug, Default)]
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; the smaller root becomes the representative
    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (keep, absorb) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[absorb] = keep;
        }
    }
}

/// Relabel `grid` so that every 4-connected component has a distinct label
///
/// Single raster scan: a cell joins the component of its left or top
/// neighbour when that neighbour has the same input label, and when both
/// qualify with different provisional labels the two are recorded as
/// equivalent. A second pass resolves each provisional label to its set
/// representative. Output labels are not dense.
pub fn split_disconnected(grid: &LabelGrid) -> LabelGrid {
    let width = grid.width();
    let height = grid.height();
    let mut provisional: Vec<RegionId> = vec![0; width * height];
    let mut sets = DisjointSet::default();

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let label = grid.get(x, y);

            let left = (x > 0 && grid.get(x - 1, y) == label).then(|| provisional[index - 1]);
            let top = (y > 0 && grid.get(x, y - 1) == label).then(|| provisional[index - width]);

            provisional[index] = match (left, top) {
                (None, None) => sets.make_set(),
                (Some(left), None) => left,
                (None, Some(top)) => top,
                (Some(left), Some(top)) => {
                    if left != top {
                        sets.union(left, top);
                    }
                    left
                }
            };
        }
    }

    for label in &mut provisional {
        *label = sets.find(*label);
    }

    LabelGrid::from_parts(width, height, provisional)
}

/// Split disconnected regions and renumber densely
///
/// Returns the repaired grid and the number of regions. Labels are
/// `0..count` in order of first appearance in a row-major scan.
pub fn repair(grid: &LabelGrid) -> (LabelGrid, usize) {
    let mut repaired = split_disconnected(grid);
    let count = repaired.renumber();
    (repaired, count)
}
