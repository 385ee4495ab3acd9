//! Small-region elimination
//!
//! Folds every region below the size threshold into the neighbour it shares
//! the longest border with, repeating until no region changes.

use tracing::{debug, trace};

use crate::adjacency::AdjacencyMatrix;
use crate::error::{Result, TerritoryError};
use crate::grid::{LabelGrid, RegionId};

/// Merge target of every region for one pass
///
/// Regions at or above `min_size` map to themselves. Undersized regions map
/// to their best neighbour, or to themselves when no neighbour shares a
/// border (a lone region covering the whole grid).
fn pick_merge_targets(
    sizes: &[usize],
    adjacency: &AdjacencyMatrix,
    min_size: usize,
) -> Vec<RegionId> {
    sizes
        .iter()
        .enumerate()
        .map(|(region, &size)| {
            if size >= min_size {
                return region;
            }
            match adjacency.best_neighbor(region) {
                Some(target) => {
                    trace!(region, size, target, "merging undersized region");
                    target
                }
                None => {
                    trace!(region, size, "undersized region has no neighbour to merge into");
                    region
                }
            }
        })
        .collect()
}

/// Follow each region's chain of targets to where it finally lands
///
/// Regions that pick each other form a cycle; the whole cycle collapses onto
/// its lowest id.
fn resolve_targets(targets: &[RegionId]) -> Vec<RegionId> {
    (0..targets.len())
        .map(|start| {
            let mut path = vec![start];
            let mut current = start;
            loop {
                let next = targets[current];
                if next == current {
                    return current;
                }
                if let Some(pos) = path.iter().position(|&seen| seen == next) {
                    return path[pos..].iter().copied().min().unwrap_or(next);
                }
                path.push(next);
                current = next;
            }
        })
        .collect()
}

/// Merge undersized regions until none can be merged further
///
/// `grid` must hold dense labels `0..region_count`. Each pass measures region
/// sizes, builds border counts, retargets every undersized region and
/// renumbers. Every pass that changes anything removes at least one region,
/// so the loop is capped at `region_count + 1` passes.
///
/// Returns the new region count.
///
/// # Errors
///
/// Returns `MergeDidNotConverge` if the cap is reached.
pub fn merge_small_regions(
    grid: &mut LabelGrid,
    region_count: usize,
    min_size: usize,
) -> Result<usize> {
    let max_passes = region_count + 1;
    let mut count = region_count;

    for pass in 0..max_passes {
        let sizes = grid.region_sizes(count);
        let adjacency = AdjacencyMatrix::from_grid(grid, count);
        let targets = pick_merge_targets(&sizes, &adjacency, min_size);

        if targets.iter().enumerate().all(|(region, &target)| region == target) {
            debug!(passes = pass, regions = count, "region merging converged");
            return Ok(count);
        }

        let resolved = resolve_targets(&targets);
        grid.relabel(|label| resolved[label]);
        count = grid.renumber();
    }

    Err(TerritoryError::MergeDidNotConverge {
        iterations: max_passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undersized_region_merges_into_only_neighbour() {
        let mut grid = LabelGrid::from_rows(&[
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();

        let count = merge_small_regions(&mut grid, 2, 2).unwrap();

        assert_eq!(count, 1);
        assert!(grid.as_slice().iter().all(|&label| label == 0));
    }

    #[test]
    fn test_longest_border_wins() {
        // Region 1 (size 2) shares four pixel pairs with 0 and two with 2
        let mut grid = LabelGrid::from_rows(&[
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![2, 2, 2, 2],
        ])
        .unwrap();

        let count = merge_small_regions(&mut grid, 3, 3).unwrap();

        assert_eq!(count, 2);
        assert_eq!(grid.get(1, 1), grid.get(0, 0));
        assert_eq!(grid.get(2, 1), grid.get(0, 0));
    }

    #[test]
    fn test_isolated_region_is_left_alone() {
        let mut grid = LabelGrid::filled(4, 4, 0);
        let count = merge_small_regions(&mut grid, 1, 3000).unwrap();
        assert_eq!(count, 1);
        assert!(grid.as_slice().iter().all(|&label| label == 0));
    }

    #[test]
    fn test_mutual_picks_collapse() {
        // Two undersized regions that are each other's best neighbour
        let mut grid = LabelGrid::from_rows(&[vec![0, 0, 1, 1]]).unwrap();
        let count = merge_small_regions(&mut grid, 2, 10).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_large_regions_untouched() {
        let mut grid = LabelGrid::from_rows(&[
            vec![0, 0, 1, 1],
            vec![0, 0, 1, 1],
        ])
        .unwrap();
        let before = grid.clone();

        let count = merge_small_regions(&mut grid, 2, 4).unwrap();

        assert_eq!(count, 2);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_resolve_targets_chains_and_cycles() {
        // 0 -> 1 -> 2 (fixed), 3 <-> 4
        let resolved = resolve_targets(&[1, 2, 2, 4, 3]);
        assert_eq!(resolved, vec![2, 2, 2, 3, 3]);
    }

    #[test]
    fn test_every_region_reaches_threshold() {
        let mut grid = LabelGrid::from_rows(&[
            vec![0, 0, 0, 1, 1, 1],
            vec![0, 2, 0, 1, 3, 1],
            vec![0, 0, 0, 1, 1, 1],
            vec![4, 4, 4, 4, 4, 4],
        ])
        .unwrap();

        let count = merge_small_regions(&mut grid, 5, 6).unwrap();

        let sizes = grid.region_sizes(count);
        assert!(sizes.iter().all(|&size| size >= 6), "sizes: {:?}", sizes);
    }
}
