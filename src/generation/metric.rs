//! Noise-perturbed distance
//!
//! Approximates the cost of walking the straight segment between two points
//! across the noise field: flat terrain costs its Euclidean length, rough
//! terrain (large `|noise|`) costs more. Nearest-site assignment under this
//! cost bends Voronoi borders away from rough terrain.

use glam::DVec2;

use crate::noise::NoiseField;

/// Path cost between two points through a noise field
///
/// Not a true metric: it is only used to compare candidate sites.
#[derive(Debug, Clone, Copy)]
pub struct PerturbedMetric<'a> {
    noise: &'a NoiseField,
    steps: usize,
    steepness: f64,
}

impl<'a> PerturbedMetric<'a> {
    /// Create a metric integrating over `steps` sub-segments
    pub fn new(noise: &'a NoiseField, steps: usize, steepness: f64) -> Self {
        Self {
            noise,
            steps: steps.max(1),
            steepness,
        }
    }

    /// Cost of the segment `a → b`
    ///
    /// The segment is cut into equal sub-steps. Each sub-step contributes
    /// `sqrt(step_x² + step_y² + steepness · (step_len · |noise|)²)` with the
    /// noise sampled at the start of the sub-step. Coinciding points cost 0.
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        let delta = b - a;
        let length = delta.length();
        if length == 0.0 {
            return 0.0;
        }

        let step_length = length / self.steps as f64;
        let step = delta / length * step_length;
        let step_length_sq = step.length_squared();

        (0..self.steps)
            .map(|i| {
                let p = a + step * i as f64;
                let rise = step_length * self.noise.sample(p.x, p.y).abs();
                (step_length_sq + self.steepness * rise * rise).sqrt()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_field(width: usize, height: usize, value: f64) -> NoiseField {
        NoiseField::from_samples(width, height, vec![value; (width + 1) * (height + 1)]).unwrap()
    }

    #[test]
    fn test_coinciding_points_cost_nothing() {
        let field = constant_field(8, 8, 0.7);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let p = DVec2::new(3.0, 5.0);
        assert_eq!(metric.distance(p, p), 0.0);
    }

    #[test]
    fn test_flat_noise_is_euclidean() {
        let field = constant_field(16, 16, 0.0);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let d = metric.distance(DVec2::new(1.0, 2.0), DVec2::new(4.0, 6.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_noise_scales_length() {
        // sqrt(1 + 32 * 0.25) = 3 for noise of magnitude 0.5
        let field = constant_field(16, 16, -0.5);
        let metric = PerturbedMetric::new(&field, 4, 32.0);
        let d = metric.distance(DVec2::new(0.0, 0.0), DVec2::new(8.0, 0.0));
        assert!((d - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_steepness_ignores_noise() {
        let field = constant_field(16, 16, 0.9);
        let metric = PerturbedMetric::new(&field, 4, 0.0);
        let d = metric.distance(DVec2::new(2.0, 2.0), DVec2::new(5.0, 6.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rough_terrain_costs_more() {
        // Noise rises towards the right edge of the grid
        let width = 16;
        let height = 4;
        let samples = (0..=height)
            .flat_map(|_| (0..=width).map(|x| x as f64 / width as f64))
            .collect();
        let field = NoiseField::from_samples(width, height, samples).unwrap();
        let metric = PerturbedMetric::new(&field, 4, 32.0);

        let smooth = metric.distance(DVec2::new(4.0, 2.0), DVec2::new(0.0, 2.0));
        let rough = metric.distance(DVec2::new(12.0, 2.0), DVec2::new(16.0, 2.0));
        assert!(rough > smooth);
    }
}
