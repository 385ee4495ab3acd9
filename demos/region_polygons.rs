//! Example: Export region polygons
//!
//! Prints every region as a flat `[x0, y0, x1, y1, ...]` coordinate list
//! together with the adjacency matrix. With the `serde` feature enabled the
//! payload is printed as JSON:
//!
//! ```text
//! cargo run --example region_polygons --features serde
//! ```

use rust_voronoi_territories::*;

fn main() {
    let world = World::generate(256, 256, 6, 7).expect("Failed to generate world");

    let polygons = world.flattened_regions();

    #[cfg(feature = "serde")]
    {
        let payload = serde_json::json!({
            "width": world.width(),
            "height": world.height(),
            "polygons": polygons,
            "adjacency": world.adjacency(),
            "centroids": world.centroids(),
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("Failed to encode world"));
    }

    #[cfg(not(feature = "serde"))]
    {
        println!("World {} x {}", world.width(), world.height());
        for (id, coords) in polygons.iter().enumerate() {
            println!("Region {}: {:?}", id, coords);
        }
        println!("\nAdjacency:");
        for row in world.adjacency() {
            let cells: Vec<&str> = row
                .iter()
                .map(|&adjacent| if adjacent { "1" } else { "." })
                .collect();
            println!("  {}", cells.join(" "));
        }
    }
}
