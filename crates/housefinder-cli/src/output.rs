use housefinder_core::RankedLocation;

/// Plain-text rendering of a result list, one card per line.
pub fn render_results(results: &[RankedLocation<'_>]) -> String {
    if results.is_empty() {
        return "No results found. Try adjusting your search criteria.\n".to_string();
    }

    let mut out = String::new();
    for (i, hit) in results.iter().enumerate() {
        let loc = hit.location;
        out.push_str(&format!(
            "{}. {} | {} (atoll: {}, island: {})",
            i + 1,
            loc.name(),
            loc.address(),
            loc.region(),
            loc.sub_region()
        ));
        if let Some(km) = hit.distance_km {
            out.push_str(&format!(" | {}", format_distance(km)));
        }
        out.push('\n');
    }
    out
}

/// Metres while the rounded value stays below 1000, kilometres with two
/// decimals from there on.
pub fn format_distance(km: f64) -> String {
    let metres = (km * 1000.0).round();
    if metres < 1000.0 {
        format!("{metres:.0} m")
    } else {
        format!("{km:.2} km")
    }
}
