//! Border-weighted region adjacency

use crate::grid::{LabelGrid, RegionId};

/// Symmetric matrix of shared-border counts between regions
///
/// Entry `(a, b)` is the number of 4-adjacent pixel pairs with one pixel in
/// `a` and the other in `b`. The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    counts: Vec<u32>,
}

impl AdjacencyMatrix {
    /// Count shared borders on a grid with dense labels `0..region_count`
    pub fn from_grid(grid: &LabelGrid, region_count: usize) -> Self {
        let mut matrix = Self {
            size: region_count,
            counts: vec![0; region_count * region_count],
        };

        for (x, y, label) in grid.cells() {
            if x + 1 < grid.width() {
                matrix.record(label, grid.get(x + 1, y));
            }
            if y + 1 < grid.height() {
                matrix.record(label, grid.get(x, y + 1));
            }
        }

        matrix
    }

    #[inline]
    fn record(&mut self, a: RegionId, b: RegionId) {
        if a != b {
            self.counts[a * self.size + b] += 1;
            self.counts[b * self.size + a] += 1;
        }
    }

    /// Number of regions (rows and columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shared-border pixel pairs between `a` and `b`
    #[inline]
    pub fn count(&self, a: RegionId, b: RegionId) -> u32 {
        self.counts[a * self.size + b]
    }

    #[inline]
    pub fn is_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        self.count(a, b) > 0
    }

    /// Regions sharing at least one pixel pair with `region`, in id order
    pub fn neighbors(&self, region: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        let row = &self.counts[region * self.size..(region + 1) * self.size];
        row.iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(other, _)| other)
    }

    /// Neighbour with the longest shared border
    ///
    /// The running best starts at zero and only a strictly greater count
    /// replaces it, so ties go to the lowest id and a region without
    /// neighbours yields `None`.
    pub fn best_neighbor(&self, region: RegionId) -> Option<RegionId> {
        let mut best = 0;
        let mut choice = None;
        for other in 0..self.size {
            let count = self.count(region, other);
            if other != region && count > best {
                best = count;
                choice = Some(other);
            }
        }
        choice
    }

    /// Boolean view: `true` where two regions touch
    pub fn to_bool_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|a| (0..self.size).map(|b| self.is_adjacent(a, b)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_regions() -> LabelGrid {
        LabelGrid::from_rows(&[
            vec![0, 0, 1],
            vec![0, 2, 1],
            vec![2, 2, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let matrix = AdjacencyMatrix::from_grid(&three_regions(), 3);

        assert_eq!(matrix.count(0, 1), 1);
        assert_eq!(matrix.count(0, 2), 3);
        assert_eq!(matrix.count(1, 2), 2);
        assert_eq!(matrix.count(0, 0), 0);
    }

    #[test]
    fn test_symmetry_and_zero_diagonal() {
        let matrix = AdjacencyMatrix::from_grid(&three_regions(), 3);
        for a in 0..3 {
            assert_eq!(matrix.count(a, a), 0);
            for b in 0..3 {
                assert_eq!(matrix.count(a, b), matrix.count(b, a));
            }
        }
    }

    #[test]
    fn test_best_neighbor() {
        let matrix = AdjacencyMatrix::from_grid(&three_regions(), 3);
        assert_eq!(matrix.best_neighbor(0), Some(2));
        assert_eq!(matrix.best_neighbor(1), Some(2));
        assert_eq!(matrix.best_neighbor(2), Some(0));
    }

    #[test]
    fn test_best_neighbor_ties_go_to_lowest_id() {
        let grid = LabelGrid::from_rows(&[vec![1, 0, 2]]).unwrap();
        let matrix = AdjacencyMatrix::from_grid(&grid, 3);
        assert_eq!(matrix.best_neighbor(0), Some(1));
    }

    #[test]
    fn test_lone_region_has_no_neighbor() {
        let grid = LabelGrid::filled(3, 3, 0);
        let matrix = AdjacencyMatrix::from_grid(&grid, 1);
        assert_eq!(matrix.best_neighbor(0), None);
        assert_eq!(matrix.neighbors(0).count(), 0);
    }

    #[test]
    fn test_bool_matrix() {
        let grid = LabelGrid::from_rows(&[vec![0, 1, 2]]).unwrap();
        let matrix = AdjacencyMatrix::from_grid(&grid, 3);
        assert_eq!(
            matrix.to_bool_matrix(),
            vec![
                vec![false, true, false],
                vec![true, false, true],
                vec![false, true, false],
            ]
        );
        assert_eq!(matrix.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
    }
}
