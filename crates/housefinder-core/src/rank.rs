// crates/housefinder-core/src/rank.rs

//! Optional distance ranking of an already-bounded result list.

use crate::geo::distance_km;
use crate::model::{Coordinates, Location, RankedLocation};
use crate::traits::Positioned;
use tracing::debug;

/// Annotates `results` with their distance from `reference` and orders them
/// nearest first.
///
/// - `reference == None`: pass-through, same order, every `distance_km` is
///   `None`. An unavailable position (geolocation failed or was denied) is
///   handled by the caller passing `None`.
/// - `reference == Some(p)`: every item gets `distance_km(p, item)` and the
///   list is sorted ascending with a stable sort, so equal distances keep
///   their input order.
///
/// Never filters or truncates.
///
/// # Examples
///
/// ```rust
/// use housefinder_core::{rank, search, Catalog, Coordinates, Criteria};
///
/// let hits = search(Catalog::embedded(), &Criteria::default());
/// let ranked = rank(hits, Some(Coordinates::new(-0.3090, 73.4400)));
/// assert_eq!(ranked[0].location.name(), "MVK Ferry Terminal");
/// ```
pub fn rank(results: Vec<&Location>, reference: Option<Coordinates>) -> Vec<RankedLocation<'_>> {
    let Some(origin) = reference else {
        return results.into_iter().map(RankedLocation::unranked).collect();
    };

    let mut ranked: Vec<RankedLocation<'_>> = results
        .into_iter()
        .map(|location| RankedLocation {
            location,
            distance_km: Some(distance_km(origin, location.coordinates())),
        })
        .collect();

    // `sort_by` is stable; distances are finite for validated catalogs.
    ranked.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });

    debug!(origin = %origin, results = ranked.len(), "rank");
    ranked
}
