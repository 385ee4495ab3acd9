//! Noise field sampling
//!
//! Precomputes coherent noise on the integer lattice of the grid and
//! interpolates it at arbitrary real positions.

mod perlin;

pub use perlin::{sample_perlin_fbm, NoiseConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, TerritoryError};

/// Fold a 64-bit world seed into the 32-bit seed used by the noise hash
#[inline]
pub fn noise_seed(seed: i64) -> u32 {
    let bits = seed as u64;
    (bits ^ (bits >> 32)) as u32
}

/// Noise samples on the `(width + 1) × (height + 1)` lattice of a grid
///
/// Lattice point `(x, y)` holds the noise at
/// `(frequency · x / width, frequency · y / height)`, so one noise period
/// spans `width / frequency` pixels regardless of the grid size.
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl NoiseField {
    /// Precompute the lattice for a `width` × `height` grid
    pub fn new(width: usize, height: usize, seed: u32, config: &NoiseConfig) -> Self {
        let stride = width + 1;
        let mut samples = vec![0.0; stride * (height + 1)];
        let scale_x = config.frequency / width as f64;
        let scale_y = config.frequency / height as f64;

        let fill_row = |(y, row): (usize, &mut [f64])| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = sample_perlin_fbm(x as f64 * scale_x, y as f64 * scale_y, seed, config);
            }
        };

        #[cfg(feature = "parallel")]
        samples.par_chunks_mut(stride).enumerate().for_each(fill_row);
        #[cfg(not(feature = "parallel"))]
        samples.chunks_mut(stride).enumerate().for_each(fill_row);

        Self {
            width,
            height,
            samples,
        }
    }

    /// Build a field from explicit lattice values in row-major order
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the grid is empty or `samples` does not
    /// hold exactly `(width + 1) * (height + 1)` values
    pub fn from_samples(width: usize, height: usize, samples: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise field dimensions must be non-zero (got {}x{})",
                width, height
            )));
        }
        let expected = (width + 1) * (height + 1);
        if samples.len() != expected {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise field needs {} lattice samples (got {})",
                expected,
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Noise value stored at lattice point `(x, y)`
    #[inline]
    pub fn lattice(&self, x: usize, y: usize) -> f64 {
        self.samples[y * (self.width + 1) + x]
    }

    /// Bilinear interpolation of the lattice at `(x, y)`
    ///
    /// Valid for `0 <= x <= width` and `0 <= y <= height`. Positions on the
    /// far edges interpolate inside the last lattice cell with a weight of 1.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let ix = (x.max(0.0).floor() as usize).min(self.width - 1);
        let iy = (y.max(0.0).floor() as usize).min(self.height - 1);
        let fx = x - ix as f64;
        let fy = y - iy as f64;

        let left = (1.0 - fy) * self.lattice(ix, iy) + fy * self.lattice(ix, iy + 1);
        let right = (1.0 - fy) * self.lattice(ix + 1, iy) + fy * self.lattice(ix + 1, iy + 1);

        (1.0 - fx) * left + fx * right
    }
}
