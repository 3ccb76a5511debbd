//! Advanced filtering example for housefinder-rs
//!
//! Walks a session the way a UI would drive it: cascading selectors, a
//! sticky position, repeated searches and a map view.

use housefinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== housefinder-rs Advanced Filtering Example ===\n");

    let mut finder = Finder::new(Catalog::load_embedded()?);

    // Example 1: Cascading selectors
    println!("--- Example 1: Cascading selectors ---");
    let regions = finder.regions();
    let region = regions.first().copied().unwrap_or_default();
    let islands = finder.sub_regions(region);
    println!("Atoll: {region}, islands: {islands:?}");
    println!("Islands before choosing an atoll: {:?}\n", finder.sub_regions(""));

    // Example 2: Nothing searched vs nothing found
    println!("--- Example 2: Search states ---");
    println!("Searched yet? {}", finder.state().has_searched());
    let state = finder.submit(&Criteria::default().region("Male"));
    println!(
        "Searched 'Male': has_searched={}, results={}\n",
        state.has_searched(),
        state.results().len()
    );

    // Example 3: The position sticks across searches
    println!("--- Example 3: Sticky reference position ---");
    finder.set_reference(Coordinates::new(-0.3090, 73.4400));
    finder.reference_failed("simulated timeout");
    let criteria = Criteria::default()
        .region(region)
        .sub_region(islands.first().copied().unwrap_or_default())
        .name("benchmark");
    for hit in finder.submit(&criteria).results() {
        println!(
            "- {} ({:.3} km)",
            hit.location.name(),
            hit.distance_km.unwrap_or_default()
        );
    }
    println!();

    // Example 4: Map view for the nearest one
    println!("--- Example 4: Map view ---");
    let nearest = finder
        .state()
        .results()
        .first()
        .map(|hit| hit.location.name().to_string());
    if let Some(name) = nearest {
        let view = finder.map_view(&name, MapMode::Detail)?;
        println!("Center: {}, zoom {}", view.center, view.zoom);
        if let Some([from, to]) = view.route {
            println!("Route: {from} -> {to}");
        }
    }

    Ok(())
}
