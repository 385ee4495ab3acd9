//! Noise-perturbed Voronoi territory maps
//!
//! A standalone library for partitioning a rectangular grid into irregular,
//! contiguous territories whose borders follow a coherent-noise terrain,
//! suitable for strategy-game maps and visualizations.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_voronoi_territories::*;
//!
//! // Generate a world
//! let config = WorldConfigBuilder::new()
//!     .seed(42)
//!     .map_size(MapSize::Custom { width: 128, height: 96, site_count: 8 })
//!     .min_region_size(500)
//!     .build().unwrap();
//!
//! let world = World::generate_with_config(config).unwrap();
//!
//! // Polygons, adjacency and centroids for rendering and gameplay
//! for (id, polygon) in world.regions().iter().enumerate() {
//!     println!(
//!         "Region {}: {} vertices, {} neighbors, centroid {:?}",
//!         id,
//!         polygon.len(),
//!         world.neighbors(id).len(),
//!         world.centroids()[id],
//!     );
//! }
//! ```
//!
//! # Features
//!
//! - `parallel` (default): Computes the noise lattice and the tessellation rows
//!   on the rayon thread pool
//! - `serde`: Enables serialization support for configuration and polygons

// Modules
pub mod error;
pub mod config;
pub mod noise;
pub mod grid;
pub mod adjacency;
pub mod generation;
pub mod polygon;
pub mod centroid;
pub mod world;

// Re-export core types for convenience
pub use error::{TerritoryError, Result};
pub use config::{WorldConfig, WorldConfigBuilder, MapSize};
pub use noise::{NoiseConfig, NoiseField};
pub use grid::{LabelGrid, RegionId};
pub use adjacency::AdjacencyMatrix;
pub use polygon::Polygon;
pub use world::World;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
