//! Error handling example for housefinder-rs
//!
//! This example demonstrates the errors raised at the edges of the crate.
//! The query functions themselves never fail.

use housefinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== housefinder-rs Error Handling Example ===\n");

    // Example 1: Missing catalog file
    println!("--- Example 1: Loading a missing catalog ---");
    match Catalog::load_from_path("does/not/exist.json") {
        Ok(catalog) => println!("  Loaded {} houses", catalog.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Invalid records are rejected at load time
    println!("--- Example 2: Invalid catalog records ---");
    let broken = r#"[{ "atoll": "Gnaviyani", "island": "Fuvahmulah", "houseName": "",
                      "latitude": -0.31, "longitude": 73.44 }]"#;
    match Catalog::from_json_str(broken) {
        Ok(_) => println!("  unexpectedly valid"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: Parsing user positions
    println!("--- Example 3: Parsing positions ---");
    for input in ["-0.3090,73.4400", "north", "95,10", ""] {
        match input.parse::<Coordinates>() {
            Ok(c) => println!("  '{input}' -> {c}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 4: No match is not an error
    println!("--- Example 4: Empty results ---");
    let catalog = Catalog::load_embedded()?;
    let hits = search(catalog, &Criteria::default().region("Male"));
    println!("  Results for 'Male': {}", hits.len());

    Ok(())
}
