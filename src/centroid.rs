//! Region centroids

use glam::DVec2;

use crate::grid::LabelGrid;

/// Mean pixel position of every region `0..region_count`
///
/// Pixels are counted at their integer coordinates `(x, y)`. The mean is
/// accumulated in a single streaming pass, `mean = (n * mean + p) / (n + 1)`,
/// with the first pixel of a region becoming its mean directly. Regions
/// without pixels stay at the origin.
pub fn region_centroids(grid: &LabelGrid, region_count: usize) -> Vec<DVec2> {
    let mut means = vec![DVec2::ZERO; region_count];
    let mut counts = vec![0usize; region_count];

    for (x, y, label) in grid.cells() {
        let p = DVec2::new(x as f64, y as f64);
        let n = counts[label] as f64;
        means[label] = (means[label] * n + p) / (n + 1.0);
        counts[label] += 1;
    }

    means
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_single_region() {
        let grid = LabelGrid::filled(3, 5, 0);
        let centroids = region_centroids(&grid, 1);
        assert_close(centroids[0], DVec2::new(1.0, 2.0));
    }

    #[test]
    fn test_first_pixel_counts() {
        let grid = LabelGrid::from_rows(&[vec![0, 1, 1, 1]]).unwrap();
        let centroids = region_centroids(&grid, 2);
        assert_close(centroids[0], DVec2::new(0.0, 0.0));
        assert_close(centroids[1], DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_known_means() {
        let grid = LabelGrid::from_rows(&[vec![0, 0, 1], vec![0, 1, 1]]).unwrap();
        let centroids = region_centroids(&grid, 2);
        assert_close(centroids[0], DVec2::new(1.0 / 3.0, 1.0 / 3.0));
        assert_close(centroids[1], DVec2::new(5.0 / 3.0, 2.0 / 3.0));
    }
}
