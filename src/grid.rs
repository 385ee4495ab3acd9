//! Region label grid
//!
//! The grid of region ids threaded through every pipeline stage. Stages take
//! it by value or by exclusive reference; nothing shares it.

use crate::error::{Result, TerritoryError};

/// Region identifier stored in every grid cell
pub type RegionId = usize;

/// A `height` × `width` grid of region ids in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: usize,
    height: usize,
    labels: Vec<RegionId>,
}

impl LabelGrid {
    /// Grid with every cell set to `label`
    pub fn filled(width: usize, height: usize, label: RegionId) -> Self {
        Self {
            width,
            height,
            labels: vec![label; width * height],
        }
    }

    /// Build a grid from row-major labels
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the grid is empty or the label count does
    /// not match `width * height`
    pub fn from_labels(width: usize, height: usize, labels: Vec<RegionId>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "label grid dimensions must be non-zero (got {}x{})",
                width, height
            )));
        }
        if labels.len() != width * height {
            return Err(TerritoryError::InvalidConfig(format!(
                "label grid of {}x{} needs {} labels (got {})",
                width,
                height,
                width * height,
                labels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Build a grid from labels already known to match the dimensions
    pub(crate) fn from_parts(width: usize, height: usize, labels: Vec<RegionId>) -> Self {
        debug_assert_eq!(labels.len(), width * height);
        Self {
            width,
            height,
            labels,
        }
    }

    /// Build a grid from rows of equal length
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_territories::LabelGrid;
    ///
    /// let grid = LabelGrid::from_rows(&[vec![0, 0, 1], vec![0, 1, 1]]).unwrap();
    /// assert_eq!(grid.get(2, 0), 1);
    /// ```
    pub fn from_rows(rows: &[Vec<RegionId>]) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return Err(TerritoryError::InvalidConfig(
                "label grid rows must all have the same length".to_string(),
            ));
        }
        Self::from_labels(width, rows.len(), rows.concat())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Label of the cell at column `x`, row `y`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> RegionId {
        self.labels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, label: RegionId) {
        self.labels[y * self.width + x] = label;
    }

    /// All labels in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[RegionId] {
        &self.labels
    }

    /// Iterate over rows of labels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[RegionId]> {
        self.labels.chunks(self.width)
    }

    /// Iterate over `(x, y, label)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, RegionId)> + '_ {
        let width = self.width;
        self.labels
            .iter()
            .enumerate()
            .map(move |(i, &label)| (i % width, i / width, label))
    }

    /// Rewrite every label through `map`
    pub fn relabel(&mut self, map: impl Fn(RegionId) -> RegionId) {
        for label in &mut self.labels {
            *label = map(*label);
        }
    }

    /// Compress labels to `0..n` in order of first appearance (row-major)
    ///
    /// Returns `n`, the number of distinct labels. The resulting ids only
    /// depend on the grid contents, so identical grids renumber identically.
    pub fn renumber(&mut self) -> usize {
        let max_label = self.labels.iter().copied().max().unwrap_or(0);
        let mut mapping = vec![usize::MAX; max_label + 1];
        let mut next = 0;

        for label in &mut self.labels {
            let slot = &mut mapping[*label];
            if *slot == usize::MAX {
                *slot = next;
                next += 1;
            }
            *label = *slot;
        }

        next
    }

    /// Pixel count of each region `0..region_count`
    pub fn region_sizes(&self, region_count: usize) -> Vec<usize> {
        let mut sizes = vec![0; region_count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// First pixel `(x, y)` of each region in row-major scan order
    ///
    /// Regions without pixels get `None`.
    pub fn region_starts(&self, region_count: usize) -> Vec<Option<(usize, usize)>> {
        let mut starts = vec![None; region_count];
        let mut remaining = region_count;

        for (x, y, label) in self.cells() {
            if starts[label].is_none() {
                starts[label] = Some((x, y));
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(LabelGrid::from_rows(&[vec![0, 1], vec![0]]).is_err());
        assert!(LabelGrid::from_rows(&[]).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut grid = LabelGrid::filled(3, 2, 7);
        grid.set(2, 1, 4);
        assert_eq!(grid.get(2, 1), 4);
        assert_eq!(grid.get(0, 0), 7);
        assert_eq!(grid.as_slice().len(), 6);
    }

    #[test]
    fn test_renumber_first_seen_order() {
        let mut grid = LabelGrid::from_rows(&[vec![9, 9, 4], vec![12, 4, 4]]).unwrap();
        let count = grid.renumber();

        assert_eq!(count, 3);
        assert_eq!(grid.as_slice(), &[0, 0, 1, 2, 1, 1]);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut grid = LabelGrid::from_rows(&[vec![5, 3], vec![3, 8]]).unwrap();
        grid.renumber();
        let once = grid.clone();
        grid.renumber();
        assert_eq!(grid, once);
    }

    #[test]
    fn test_region_sizes_and_starts() {
        let grid = LabelGrid::from_rows(&[vec![0, 0, 1], vec![2, 1, 1]]).unwrap();

        assert_eq!(grid.region_sizes(3), vec![2, 3, 1]);
        assert_eq!(
            grid.region_starts(3),
            vec![Some((0, 0)), Some((2, 0)), Some((0, 1))]
        );
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = LabelGrid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
    }
}
