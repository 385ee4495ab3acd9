//! World main structure

use std::collections::HashSet;

use glam::DVec2;
use tracing::{debug, info};

use crate::adjacency::AdjacencyMatrix;
use crate::centroid::region_centroids;
use crate::config::WorldConfig;
use crate::error::Result;
use crate::generation::generate_label_grid;
use crate::grid::{LabelGrid, RegionId};
use crate::polygon::{extract_polygons, Polygon};

/// A generated territory map
///
/// Holds one simplified polygon per region together with region adjacency,
/// centroids and the final label grid. Region ids index every per-region
/// collection.
///
/// # Examples
///
/// ```
/// use rust_voronoi_territories::*;
///
/// let world = World::generate(64, 64, 4, 1).unwrap();
/// println!("Generated {} regions", world.region_count());
///
/// for (id, polygon) in world.regions().iter().enumerate() {
///     println!("Region {} has {} vertices", id, polygon.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct World {
    /// Configuration used to generate this world
    config: WorldConfig,

    /// Final region id of every pixel
    labels: LabelGrid,

    /// Simplified boundary polygon of every region (indexed by region id)
    regions: Vec<Polygon>,

    /// `adjacency[a][b]` is true when regions `a` and `b` share a border
    adjacency: Vec<Vec<bool>>,

    /// Neighbour ids of every region in ascending order
    neighbors: Vec<Vec<RegionId>>,

    /// Mean pixel position of every region
    centroids: Vec<DVec2>,

    /// Pixel count of every region
    region_sizes: Vec<usize>,
}

impl World {
    /// Generate a world with default parameters
    ///
    /// Deterministic: the same arguments always produce the identical world.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `width`, `height` or `site_count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_territories::*;
    ///
    /// let world = World::generate(32, 32, 1, 1).unwrap();
    /// assert_eq!(world.region_count(), 1);
    /// assert_eq!(world.regions()[0].len(), 4);
    /// ```
    pub fn generate(width: usize, height: usize, site_count: usize, seed: i64) -> Result<Self> {
        Self::generate_with_config(WorldConfig::new(width, height, site_count, seed)?)
    }

    /// Generate a world from a full configuration
    ///
    /// The configuration is validated first, so hand-built or deserialized
    /// values get the same checks as the builder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if [`WorldConfig::validate`] fails.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_territories::*;
    ///
    /// let config = WorldConfigBuilder::new()
    ///     .seed(12345)
    ///     .map_size(MapSize::Custom { width: 96, height: 64, site_count: 6 })
    ///     .min_region_size(400)
    ///     .build()
    ///     .unwrap();
    ///
    /// let world = World::generate_with_config(config).unwrap();
    /// assert!(world.region_count() > 0);
    /// ```
    pub fn generate_with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;

        info!(
            width = config.width,
            height = config.height,
            sites = config.site_count,
            seed = config.seed,
            "generating world"
        );

        let (labels, region_count) = generate_label_grid(&config)?;

        debug!(regions = region_count, "building adjacency");
        let borders = AdjacencyMatrix::from_grid(&labels, region_count);

        debug!(tolerance = config.simplify_tolerance, "tracing region polygons");
        let regions = extract_polygons(&labels, region_count, config.simplify_tolerance)?;

        debug!("computing centroids");
        let centroids = region_centroids(&labels, region_count);
        let region_sizes = labels.region_sizes(region_count);
        let neighbors = (0..region_count)
            .map(|region| borders.neighbors(region).collect())
            .collect();

        info!(regions = region_count, "world generated");

        Ok(Self {
            config,
            adjacency: borders.to_bool_matrix(),
            labels,
            regions,
            neighbors,
            centroids,
            region_sizes,
        })
    }

    /// Get the configuration used to generate this world
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.labels.height()
    }

    /// Get the number of regions in this world
    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// All region polygons, indexed by region id
    #[inline]
    pub fn regions(&self) -> &[Polygon] {
        &self.regions
    }

    /// Get a region polygon by id
    ///
    /// Returns `None` if the id is out of bounds.
    #[inline]
    pub fn region(&self, id: RegionId) -> Option<&Polygon> {
        self.regions.get(id)
    }

    /// Boolean adjacency matrix, `region_count` × `region_count`
    #[inline]
    pub fn adjacency(&self) -> &[Vec<bool>] {
        &self.adjacency
    }

    /// Check whether two regions share a border
    ///
    /// Out-of-range ids are never adjacent.
    pub fn is_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        self.adjacency
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(false)
    }

    /// Get neighbour ids for a region
    ///
    /// Returns an empty slice if the region id is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_voronoi_territories::*;
    /// # let world = World::generate(64, 64, 4, 1).unwrap();
    /// let neighbors = world.neighbors(0);
    /// println!("Region 0 has {} neighbors", neighbors.len());
    /// ```
    pub fn neighbors(&self, id: RegionId) -> &[RegionId] {
        self.neighbors
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mean pixel position of every region
    #[inline]
    pub fn centroids(&self) -> &[DVec2] {
        &self.centroids
    }

    #[inline]
    pub fn centroid(&self, id: RegionId) -> Option<DVec2> {
        self.centroids.get(id).copied()
    }

    /// Final label grid (region id of every pixel)
    #[inline]
    pub fn labels(&self) -> &LabelGrid {
        &self.labels
    }

    /// Pixel count of every region
    #[inline]
    pub fn region_sizes(&self) -> &[usize] {
        &self.region_sizes
    }

    /// Find the region under a position in pixel coordinates
    ///
    /// Returns `None` for positions outside the map.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_voronoi_territories::*;
    /// # let world = World::generate(64, 64, 4, 1).unwrap();
    /// let id = world.find_region_at(DVec2::new(10.5, 20.25)).unwrap();
    /// assert_eq!(id, world.labels().get(10, 20));
    /// assert!(world.find_region_at(DVec2::new(-1.0, 0.0)).is_none());
    /// ```
    pub fn find_region_at(&self, position: DVec2) -> Option<RegionId> {
        if !(position.x >= 0.0 && position.y >= 0.0) {
            return None;
        }
        let x = position.x.floor() as usize;
        let y = position.y.floor() as usize;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.labels.get(x, y))
    }

    /// Find regions within a given hop count from a center region (BFS)
    ///
    /// # Arguments
    ///
    /// * `center_id` - Starting region ID
    /// * `hops` - Maximum number of region hops (0 = just the center region)
    ///
    /// # Returns
    ///
    /// Region IDs within range in ascending order, including the center.
    /// Returns an empty vec if `center_id` is invalid.
    pub fn find_regions_within_hops(&self, center_id: RegionId, hops: usize) -> Vec<RegionId> {
        if center_id >= self.region_count() {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut current = vec![center_id];
        visited.insert(center_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &region in &current {
                for &neighbor in self.neighbors(region) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            current = next;
        }

        let mut found: Vec<RegionId> = visited.into_iter().collect();
        found.sort_unstable();
        found
    }

    /// Region polygons as interleaved `[x0, y0, x1, y1, ...]` coordinate lists
    pub fn flattened_regions(&self) -> Vec<Vec<f64>> {
        self.regions.iter().map(Polygon::flatten).collect()
    }
}
