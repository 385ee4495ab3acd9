//! Nearest-site tessellation
//!
//! Assigns every grid cell to the site with the lowest perturbed distance.
//! Cells are independent of each other, so rows are labelled in parallel
//! when the `parallel` feature is enabled.

use glam::DVec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::generation::metric::PerturbedMetric;
use crate::grid::{LabelGrid, RegionId};

/// Index of the site closest to `point` under `metric`
///
/// Ties go to the lowest site index. `sites` must not be empty.
pub fn nearest_site(sites: &[DVec2], metric: &PerturbedMetric<'_>, point: DVec2) -> RegionId {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;

    for (index, &site) in sites.iter().enumerate() {
        let distance = metric.distance(point, site);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    best_index
}

/// Label a `width` × `height` grid with the nearest site of every cell
///
/// The resulting labels are site indices `0..sites.len()`. A site whose
/// cells are split into several islands still shares one label here.
pub fn tessellate(
    sites: &[DVec2],
    metric: &PerturbedMetric<'_>,
    width: usize,
    height: usize,
) -> LabelGrid {
    let mut labels = vec![0; width * height];

    let label_row = |(y, row): (usize, &mut [RegionId])| {
        for (x, label) in row.iter_mut().enumerate() {
            *label = nearest_site(sites, metric, DVec2::new(x as f64, y as f64));
        }
    };

    #[cfg(feature = "parallel")]
    labels.par_chunks_mut(width).enumerate().for_each(label_row);
    #[cfg(not(feature = "parallel"))]
    labels.chunks_mut(width).enumerate().for_each(label_row);

    LabelGrid::from_parts(width, height, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseField;

    fn flat_field(width: usize, height: usize) -> NoiseField {
        NoiseField::from_samples(width, height, vec![0.0; (width + 1) * (height + 1)]).unwrap()
    }

    #[test]
    fn test_two_sites_split_grid() {
        let field = flat_field(10, 4);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let sites = [DVec2::new(1.0, 2.0), DVec2::new(8.0, 2.0)];

        let grid = tessellate(&sites, &metric, 10, 4);

        for y in 0..4 {
            assert_eq!(grid.get(0, y), 0);
            assert_eq!(grid.get(3, y), 0);
            assert_eq!(grid.get(6, y), 1);
            assert_eq!(grid.get(9, y), 1);
        }
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let field = flat_field(4, 4);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let sites = [DVec2::new(0.0, 1.0), DVec2::new(2.0, 1.0)];

        // (1, 1) is equally far from both sites
        assert_eq!(nearest_site(&sites, &metric, DVec2::new(1.0, 1.0)), 0);
    }

    #[test]
    fn test_single_site_claims_everything() {
        let field = flat_field(5, 5);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let grid = tessellate(&[DVec2::new(2.5, 2.5)], &metric, 5, 5);
        assert!(grid.as_slice().iter().all(|&label| label == 0));
    }

    #[test]
    fn test_labels_are_site_indices() {
        let field = NoiseField::new(24, 24, 11, &crate::noise::NoiseConfig::default());
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let sites = crate::generation::sample_sites(5, 24, 24, 11);

        let grid = tessellate(&sites, &metric, 24, 24);
        assert!(grid.as_slice().iter().all(|&label| label < sites.len()));
    }
}
