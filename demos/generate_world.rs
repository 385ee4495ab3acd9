//! Example: Generate a territory map
//!
//! Demonstrates the basic usage of the generation pipeline.
//! Run with `RUST_LOG=debug` to see each pipeline stage.

use rust_voronoi_territories::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();

    println!("Voronoi Territory Generation Example");
    println!("====================================\n");

    let config = WorldConfigBuilder::new()
        .seed(42)
        .map_size(MapSize::Small) // Small keeps the example fast
        .min_region_size(1500)
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Grid: {} x {}", config.width, config.height);
    println!("  Sites: {}", config.site_count);
    println!("  Min Region Size: {} px", config.min_region_size);
    println!("  Simplify Tolerance: {}", config.simplify_tolerance);
    println!();

    println!("Generating world...");
    let world = World::generate_with_config(config).expect("Failed to generate world");
    println!("Generated {} regions\n", world.region_count());

    let total_vertices: usize = world.regions().iter().map(Polygon::len).sum();
    let total_neighbors: usize = (0..world.region_count())
        .map(|id| world.neighbors(id).len())
        .sum();
    let count = world.region_count() as f64;

    println!("Statistics:");
    println!("  Average vertices per region: {:.2}", total_vertices as f64 / count);
    println!("  Average neighbors per region: {:.2}", total_neighbors as f64 / count);
    println!();

    println!("Regions:");
    for (id, polygon) in world.regions().iter().enumerate() {
        let centroid = world.centroids()[id];
        println!(
            "  Region {}: size={} px, area={:.1}, vertices={}, \
             centroid=({:.1}, {:.1}), neighbors={:?}",
            id,
            world.region_sizes()[id],
            polygon.area(),
            polygon.len(),
            centroid.x,
            centroid.y,
            world.neighbors(id)
        );
    }

    let center = DVec2::new(world.width() as f64 / 2.0, world.height() as f64 / 2.0);
    if let Some(id) = world.find_region_at(center) {
        println!("\nMap center lies in region {}", id);
        println!("Regions within 2 hops: {:?}", world.find_regions_within_hops(id, 2));
    }

    println!("\nGeneration complete!");
}
