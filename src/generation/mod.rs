//! Core territory generation
//!
//! Produces the final region label grid: noise field, site sampling,
//! perturbed-distance tessellation, connected-component repair and
//! small-region merging.

mod merge;
mod metric;
mod repair;
mod sites;
mod tessellate;

pub use merge::merge_small_regions;
pub use metric::PerturbedMetric;
pub use repair::{repair, split_disconnected};
pub use sites::sample_sites;
pub use tessellate::{nearest_site, tessellate};

use tracing::debug;

use crate::config::WorldConfig;
use crate::error::Result;
use crate::grid::LabelGrid;
use crate::noise::{noise_seed, NoiseField};

/// Generate the final label grid from configuration
///
/// Returns the grid together with its region count. Labels are dense
/// (`0..count`), every region is 4-connected and every region has at least
/// `config.min_region_size` pixels unless it has no neighbour at all.
///
/// # Errors
///
/// Returns `InvalidConfig` if `config` fails [`WorldConfig::validate`], or
/// `MergeDidNotConverge` from the merge stage.
pub fn generate_label_grid(config: &WorldConfig) -> Result<(LabelGrid, usize)> {
    config.validate()?;
    let (width, height) = (config.width, config.height);

    // Step 1: Precompute noise on the pixel-corner lattice
    debug!(width, height, "precomputing noise field");
    let noise = NoiseField::new(width, height, noise_seed(config.noise_seed), &config.noise);

    // Step 2: Place sites
    debug!(sites = config.site_count, seed = config.seed, "placing sites");
    let sites = sample_sites(config.site_count, width, height, config.seed);

    // Step 3: Nearest-site labelling under the perturbed distance
    debug!("tessellating grid");
    let metric = PerturbedMetric::new(&noise, config.integration_steps, config.steepness);
    let raw = tessellate(&sites, &metric, width, height);

    // Step 4: One label per connected component, renumbered densely
    debug!("splitting disconnected regions");
    let (mut grid, count) = repair(&raw);
    debug!(regions = count, "regions after repair");

    // Step 5: Fold small regions into their neighbours
    debug!(min_size = config.min_region_size, "merging small regions");
    let count = merge_small_regions(&mut grid, count, config.min_region_size)?;

    Ok((grid, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapSize, WorldConfigBuilder};
    use std::collections::VecDeque;

    fn small_config(seed: i64, site_count: usize, min_region_size: usize) -> WorldConfig {
        WorldConfigBuilder::new()
            .seed(seed)
            .map_size(MapSize::Custom {
                width: 48,
                height: 40,
                site_count,
            })
            .min_region_size(min_region_size)
            .build()
            .unwrap()
    }

    /// Count 4-connected components of `region` with an independent BFS
    fn component_count(grid: &LabelGrid, region: usize) -> usize {
        let (w, h) = (grid.width(), grid.height());
        let mut seen = vec![false; w * h];
        let mut components = 0;

        for start in 0..w * h {
            if seen[start] || grid.as_slice()[start] != region {
                continue;
            }
            components += 1;
            seen[start] = true;
            let mut queue = VecDeque::from([start]);
            while let Some(i) = queue.pop_front() {
                let (x, y) = (i % w, i / w);
                let mut neighbours = Vec::with_capacity(4);
                if x > 0 {
                    neighbours.push(i - 1);
                }
                if x + 1 < w {
                    neighbours.push(i + 1);
                }
                if y > 0 {
                    neighbours.push(i - w);
                }
                if y + 1 < h {
                    neighbours.push(i + w);
                }
                for n in neighbours {
                    if !seen[n] && grid.as_slice()[n] == region {
                        seen[n] = true;
                        queue.push_back(n);
                    }
                }
            }
        }

        components
    }

    #[test]
    fn test_label_grid_is_deterministic() {
        let config = small_config(9, 6, 100);
        let (a, count_a) = generate_label_grid(&config).unwrap();
        let (b, count_b) = generate_label_grid(&config).unwrap();
        assert_eq!(count_a, count_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_repaired_labels_are_dense_and_connected() {
        let config = small_config(5, 12, 0);
        let (grid, count) = generate_label_grid(&config).unwrap();

        let sizes = grid.region_sizes(count);
        assert!(sizes.iter().all(|&size| size > 0), "labels must be dense");
        for region in 0..count {
            assert_eq!(component_count(&grid, region), 1, "region {} is split", region);
        }
    }

    #[test]
    fn test_merged_regions_respect_size_floor() {
        let config = small_config(21, 10, 200);
        let (grid, count) = generate_label_grid(&config).unwrap();

        let sizes = grid.region_sizes(count);
        if count > 1 {
            assert!(sizes.iter().all(|&size| size >= 200), "sizes: {:?}", sizes);
        }
        for region in 0..count {
            assert_eq!(component_count(&grid, region), 1);
        }
    }

    #[test]
    fn test_unvalidated_config_is_rejected() {
        let mut config = small_config(1, 4, 0);
        config.height = 0;
        assert!(matches!(
            generate_label_grid(&config),
            Err(crate::error::TerritoryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_single_site_single_region() {
        let config = small_config(1, 1, 3000);
        let (grid, count) = generate_label_grid(&config).unwrap();
        assert_eq!(count, 1);
        assert!(grid.as_slice().iter().all(|&label| label == 0));
    }
}
