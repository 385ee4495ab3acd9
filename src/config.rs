//! World Configuration and Builder
//!
//! This module provides configuration types for deterministic territory map generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerritoryError};
use crate::noise::NoiseConfig;

/// Map size presets
///
/// Each preset fixes the grid dimensions and the number of Voronoi sites.
/// Fewer sites than regions-that-survive-merging is normal: small regions are
/// folded into their neighbours after tessellation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapSize {
    /// 256 × 256 pixels, 6 sites
    Small,
    /// 512 × 512 pixels, 15 sites (default)
    Medium,
    /// 600 × 600 pixels, 40 sites
    Large,
    /// Custom grid dimensions and site count
    Custom {
        /// Grid width in pixels
        width: usize,
        /// Grid height in pixels
        height: usize,
        /// Number of Voronoi sites to sample
        site_count: usize,
    },
}

impl MapSize {
    /// Grid dimensions `(width, height)` in pixels
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            MapSize::Small => (256, 256),
            MapSize::Medium => (512, 512),
            MapSize::Large => (600, 600),
            MapSize::Custom { width, height, .. } => (width, height),
        }
    }

    /// Number of Voronoi sites sampled before repair and merging
    pub fn site_count(self) -> usize {
        match self {
            MapSize::Small => 6,
            MapSize::Medium => 15,
            MapSize::Large => 40,
            MapSize::Custom { site_count, .. } => site_count,
        }
    }

    /// Get a human-readable name for this map size
    pub fn name(self) -> &'static str {
        match self {
            MapSize::Small => "Small",
            MapSize::Medium => "Medium",
            MapSize::Large => "Large",
            MapSize::Custom { .. } => "Custom",
        }
    }
}

impl Default for MapSize {
    fn default() -> Self {
        MapSize::Medium
    }
}

/// Configuration for deterministic territory generation
///
/// The same configuration always produces the identical world: same label
/// grid, same polygons, same adjacency and centroids.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_territories::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .map_size(MapSize::Small)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width, 256);
/// assert_eq!(config.noise_seed, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Grid width in pixels
    pub width: usize,

    /// Grid height in pixels
    pub height: usize,

    /// Number of Voronoi sites
    pub site_count: usize,

    /// Seed for site placement
    pub seed: i64,

    /// Seed for the noise field (separate from site placement)
    ///
    /// Keeping the sites and changing only this seed bends the same
    /// territories differently.
    pub noise_seed: i64,

    /// Regions with fewer pixels than this are merged into a neighbour
    pub min_region_size: usize,

    /// Maximum perpendicular deviation (in pixels) of a removed polygon vertex
    pub simplify_tolerance: f64,

    /// Coherent noise parameters
    pub noise: NoiseConfig,

    /// Number of sub-steps used to integrate the perturbed distance
    pub integration_steps: usize,

    /// How strongly noise roughness inflates the effective distance
    pub steepness: f64,
}

impl WorldConfig {
    /// Configuration for a `width` × `height` grid with `site_count` sites
    /// and every other parameter at its default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any of the three counts is zero.
    pub fn new(width: usize, height: usize, site_count: usize, seed: i64) -> Result<Self> {
        WorldConfigBuilder::new()
            .map_size(MapSize::Custom {
                width,
                height,
                site_count,
            })
            .seed(seed)
            .build()
    }

    /// Total number of pixels in the grid
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Check every field against the ranges generation relies on
    ///
    /// The fields are public, so a configuration built by hand or
    /// deserialized never passed through the builder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero width, height, site count or
    /// integration step count, a negative or non-finite tolerance or
    /// steepness, a non-positive noise frequency, or octaves outside 1..=16
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "grid dimensions must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if self.site_count == 0 {
            return Err(TerritoryError::InvalidConfig(
                "site count must be >= 1".to_string(),
            ));
        }
        if self.integration_steps == 0 {
            return Err(TerritoryError::InvalidConfig(
                "integration steps must be >= 1".to_string(),
            ));
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "simplify tolerance must be a finite value >= 0 (got {})",
                self.simplify_tolerance
            )));
        }
        if !self.steepness.is_finite() || self.steepness < 0.0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "steepness must be a finite value >= 0 (got {})",
                self.steepness
            )));
        }
        if !(self.noise.frequency > 0.0) {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise frequency must be positive (got {})",
                self.noise.frequency
            )));
        }
        if self.noise.octaves == 0 || self.noise.octaves > 16 {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise octaves must be in 1..=16 (got {})",
                self.noise.octaves
            )));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfigBuilder::new()
            .build()
            .expect("default world configuration is valid")
    }
}

/// Builder for creating WorldConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_voronoi_territories::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(12345)
///     .map_size(MapSize::Custom { width: 128, height: 96, site_count: 5 })
///     .min_region_size(500)
///     .simplify_tolerance(2.0)
///     .unwrap()
///     .noise_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!((config.width, config.height), (128, 96));
/// ```
#[derive(Debug, Clone)]
pub struct WorldConfigBuilder {
    seed: Option<i64>,
    map_size: MapSize,
    noise_seed: Option<i64>,
    min_region_size: usize,
    simplify_tolerance: f64,
    noise: NoiseConfig,
    integration_steps: usize,
    steepness: f64,
}

impl WorldConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - map_size: Medium (512 × 512, 15 sites)
    /// - noise_seed: Same as seed
    /// - min_region_size: 3000 pixels
    /// - simplify_tolerance: 1.5 pixels
    /// - noise: `NoiseConfig::default()`
    /// - integration_steps: 4
    /// - steepness: 32.0
    pub fn new() -> Self {
        Self {
            seed: None,
            map_size: MapSize::default(),
            noise_seed: None,
            min_region_size: 3000,
            simplify_tolerance: 1.5,
            noise: NoiseConfig::default(),
            integration_steps: 4,
            steepness: 32.0,
        }
    }

    /// Set the random seed for site placement
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the grid dimensions and site count
    pub fn map_size(mut self, size: MapSize) -> Self {
        self.map_size = size;
        self
    }

    /// Set a separate noise seed
    ///
    /// If not set, the noise seed matches the site seed.
    pub fn noise_seed(mut self, seed: i64) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    /// Set the minimum region size in pixels
    ///
    /// A value of 0 or 1 disables merging.
    pub fn min_region_size(mut self, pixels: usize) -> Self {
        self.min_region_size = pixels;
        self
    }

    /// Set the polygon simplification tolerance in pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is negative or not finite
    pub fn simplify_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "simplify tolerance must be a finite value >= 0 (got {})",
                tolerance
            )));
        }
        self.simplify_tolerance = tolerance;
        Ok(self)
    }

    /// Set the noise parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the frequency is not positive or the octave
    /// count is outside 1..=16
    pub fn noise(mut self, noise: NoiseConfig) -> Result<Self> {
        if !(noise.frequency > 0.0) {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise frequency must be positive (got {})",
                noise.frequency
            )));
        }
        if noise.octaves == 0 || noise.octaves > 16 {
            return Err(TerritoryError::InvalidConfig(format!(
                "noise octaves must be in 1..=16 (got {})",
                noise.octaves
            )));
        }
        self.noise = noise;
        Ok(self)
    }

    /// Set the number of integration sub-steps for the perturbed distance
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if steps is 0
    pub fn integration_steps(mut self, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(TerritoryError::InvalidConfig(
                "integration steps must be >= 1".to_string(),
            ));
        }
        self.integration_steps = steps;
        Ok(self)
    }

    /// Set the steepness factor of the perturbed distance
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if steepness is negative or not finite
    pub fn steepness(mut self, steepness: f64) -> Result<Self> {
        if !steepness.is_finite() || steepness < 0.0 {
            return Err(TerritoryError::InvalidConfig(format!(
                "steepness must be a finite value >= 0 (got {})",
                steepness
            )));
        }
        self.steepness = steepness;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the map size has a zero width, height or
    /// site count, or any other field fails [`WorldConfig::validate`]
    pub fn build(self) -> Result<WorldConfig> {
        let (width, height) = self.map_size.dimensions();
        let site_count = self.map_size.site_count();

        let seed = self.seed.unwrap_or_else(rand::random);
        let noise_seed = self.noise_seed.unwrap_or(seed);

        let config = WorldConfig {
            width,
            height,
            site_count,
            seed,
            noise_seed,
            min_region_size: self.min_region_size,
            simplify_tolerance: self.simplify_tolerance,
            noise: self.noise,
            integration_steps: self.integration_steps,
            steepness: self.steepness,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for WorldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
