//! Random site placement
//!
//! Voronoi sites are drawn uniformly over the grid from a seeded ChaCha
//! generator, so the same seed always yields the same territories.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sample `count` sites uniformly over `[0, width) × [0, height)`
///
/// # Example
///
/// ```rust
/// use rust_voronoi_territories::generation::sample_sites;
///
/// let sites = sample_sites(10, 64, 32, 42);
/// assert_eq!(sites.len(), 10);
/// assert!(sites.iter().all(|s| s.x < 64.0 && s.y < 32.0));
/// ```
pub fn sample_sites(count: usize, width: usize, height: usize, seed: i64) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let width = width as f64;
    let height = height as f64;

    (0..count)
        .map(|_| {
            let x = rng.gen::<f64>() * width;
            let y = rng.gen::<f64>() * height;
            DVec2::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_count() {
        for count in [0, 1, 4, 100] {
            assert_eq!(sample_sites(count, 50, 50, 7).len(), count);
        }
    }

    #[test]
    fn test_sites_within_bounds() {
        for site in sample_sites(500, 40, 10, 3) {
            assert!(site.x >= 0.0 && site.x < 40.0);
            assert!(site.y >= 0.0 && site.y < 10.0);
        }
    }

    #[test]
    fn test_site_determinism() {
        assert_eq!(sample_sites(20, 64, 64, 42), sample_sites(20, 64, 64, 42));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(sample_sites(20, 64, 64, 1), sample_sites(20, 64, 64, 2));
    }
}
