//! Basic usage example for housefinder-rs
//!
//! This example demonstrates how to:
//! - Load the bundled catalog
//! - List atolls and islands for the selectors
//! - Search by atoll, island and name
//! - Rank results by distance from a position

use housefinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== housefinder-rs Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading bundled catalog...");
    let catalog = Catalog::load_embedded()?;
    println!("✓ Catalog loaded: {} houses\n", catalog.len());

    // Example 1: Selector contents
    println!("--- Example 1: Atolls and islands ---");
    for region in list_regions(catalog) {
        println!("{region}: {:?}", list_sub_regions(catalog, region));
    }
    println!();

    // Example 2: Everything in an atoll (capped at 10)
    println!("--- Example 2: Houses in Gnaviyani ---");
    let hits = search(catalog, &Criteria::default().region("Gnaviyani"));
    for (i, house) in hits.iter().enumerate() {
        println!("{}. {} ({})", i + 1, house.name(), house.address());
    }
    println!("Showing {} of at most {MAX_RESULTS}\n", hits.len());

    // Example 3: Name search
    println!("--- Example 3: Name contains 'fish' ---");
    for house in search(catalog, &Criteria::default().name("fish")) {
        println!("- {} @ {:.6}, {:.6}", house.name(), house.latitude, house.longitude);
    }
    println!();

    // Example 4: Nearest first
    println!("--- Example 4: Ranked from the harbour ---");
    let here = Coordinates::new(-0.3090, 73.4400);
    let ranked = rank(hits, Some(here));
    for (i, hit) in ranked.iter().take(3).enumerate() {
        let km = hit.distance_km.unwrap_or_default();
        println!("{}. {} ({:.0} m)", i + 1, hit.location.name(), km * 1000.0);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
