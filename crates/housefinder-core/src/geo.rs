// crates/housefinder-core/src/geo.rs

//! Great-circle distance on a spherical Earth.

use crate::model::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b`, in kilometres.
///
/// Symmetric, zero for identical points, never negative. Inputs are not
/// range-checked; catalog loading is responsible for valid coordinates.
///
/// # Examples
///
/// ```rust
/// use housefinder_core::{distance_km, Coordinates};
///
/// let london = Coordinates::new(51.5074, -0.1278);
/// let paris = Coordinates::new(48.8566, 2.3522);
/// let d = distance_km(london, paris);
/// assert!((d - 344.0).abs() < 5.0);
/// ```
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
