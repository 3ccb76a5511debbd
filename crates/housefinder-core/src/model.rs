// crates/housefinder-core/src/model.rs
use crate::error::{FinderError, Result};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both components are finite and inside the usual degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"<lat>,<lon>"`, e.g. `"-0.3090, 73.4400"`.
impl FromStr for Coordinates {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FinderError::InvalidCoordinates(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

        let coords = Coordinates::new(latitude, longitude);
        if !coords.is_valid() {
            return Err(invalid());
        }
        Ok(coords)
    }
}

/// One catalog entry.
///
/// Field names follow the domain model; the serde aliases accept the
/// original dataset's `atoll` / `island` / `houseName` keys as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Top-level grouping (atoll).
    #[serde(alias = "atoll")]
    pub region: String,
    /// Grouping within the region (island).
    #[serde(alias = "island", alias = "subRegion")]
    pub sub_region: String,
    /// Display and search key (house name).
    #[serde(alias = "houseName")]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn sub_region(&self) -> &str {
        &self.sub_region
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-only; plays no role in filtering.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Checks the integrity rules every catalog record must satisfy.
    fn validate(&self) -> std::result::Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("region is empty".into());
        }
        if self.sub_region.trim().is_empty() {
            return Err("sub-region is empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} out of range [-90, 90]", self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            ));
        }
        Ok(())
    }
}

/// Per-search filter input. An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub sub_region: String,
    /// Case-insensitive substring of the location name; trimmed before use.
    #[serde(default)]
    pub name: String,
}

impl Criteria {
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = sub_region.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A search hit, optionally annotated with its distance from the reference
/// position. `distance_km` is `Some` iff ranking ran with a reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedLocation<'a> {
    #[serde(flatten)]
    pub location: &'a Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl<'a> RankedLocation<'a> {
    #[inline]
    pub fn unranked(location: &'a Location) -> Self {
        Self {
            location,
            distance_km: None,
        }
    }
}

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub regions: usize,
    pub sub_regions: usize,
    pub locations: usize,
}

/// The read-only, ordered set of locations every query runs against.
///
/// Construction validates each record; afterwards the catalog only hands out
/// shared references, so its order and contents are fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Validates `locations` and freezes them in the given order.
    ///
    /// # Errors
    ///
    /// [`FinderError::InvalidRecord`] for the first record with an empty
    /// region, sub-region or name, or with a non-finite / out-of-range
    /// coordinate.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        for (index, location) in locations.iter().enumerate() {
            location
                .validate()
                .map_err(|reason| FinderError::InvalidRecord { index, reason })?;
        }
        Ok(Self { locations })
    }

    /// All locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let regions: BTreeSet<&str> = self.iter().map(Location::region).collect();
        let sub_regions: BTreeSet<(&str, &str)> = self
            .iter()
            .map(|l| (l.region(), l.sub_region()))
            .collect();

        CatalogStats {
            regions: regions.len(),
            sub_regions: sub_regions.len(),
            locations: self.locations.len(),
        }
    }

    /// First location whose name equals `name`, ignoring case and
    /// surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        let q = name.trim();
        if q.is_empty() {
            return None;
        }
        self.iter().find(|l| l.is_named(q))
    }
}

impl TryFrom<Vec<Location>> for Catalog {
    type Error = FinderError;

    fn try_from(locations: Vec<Location>) -> Result<Self> {
        Catalog::new(locations)
    }
}

impl From<Catalog> for Vec<Location> {
    fn from(catalog: Catalog) -> Self {
        catalog.locations
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(name: &str) -> Location {
        Location {
            region: "Gnaviyani".into(),
            sub_region: "Fuvahmulah".into(),
            name: name.into(),
            address: format!("{name}, Fuvahmulah"),
            latitude: -0.3087,
            longitude: 73.4401,
        }
    }

    #[test]
    fn parses_coordinates_with_whitespace() {
        let c: Coordinates = " -0.3090 , 73.4400 ".parse().unwrap();
        assert_eq!(c, Coordinates::new(-0.3090, 73.4400));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "1.0", "a,b", "1.0,", "91,0", "0,181", "NaN,0", "inf,0"] {
            assert!(
                matches!(
                    bad.parse::<Coordinates>(),
                    Err(FinderError::InvalidCoordinates(_))
                ),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn catalog_rejects_empty_name() {
        let err = Catalog::new(vec![house("Slip Way"), house("  ")]).unwrap_err();
        match err {
            FinderError::InvalidRecord { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn catalog_rejects_out_of_range_coordinates() {
        let mut bad = house("Runway 29");
        bad.longitude = 200.0;
        assert!(Catalog::new(vec![bad]).is_err());

        let mut nan = house("Runway 29");
        nan.latitude = f64::NAN;
        assert!(Catalog::new(vec![nan]).is_err());
    }

    #[test]
    fn stats_count_distinct_groups() {
        let mut other = house("Harbour");
        other.region = "Kaafu".into();
        other.sub_region = "Male".into();
        let catalog = Catalog::new(vec![house("A"), house("B"), other]).unwrap();

        let stats = catalog.stats();
        assert_eq!(stats.regions, 2);
        assert_eq!(stats.sub_regions, 2);
        assert_eq!(stats.locations, 3);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let catalog = Catalog::new(vec![house("Fish Market"), house("Slip Way")]).unwrap();
        assert_eq!(
            catalog.find_by_name("  slip way ").map(Location::name),
            Some("Slip Way")
        );
        assert!(catalog.find_by_name("slip").is_none());
        assert!(catalog.find_by_name("").is_none());
    }

    #[test]
    fn criteria_builder_sets_fields() {
        let c = Criteria::default().region("Gnaviyani").name("fish");
        assert_eq!(c.region, "Gnaviyani");
        assert!(c.sub_region.is_empty());
        assert_eq!(c.name, "fish");
    }

    #[test]
    fn ranked_location_serializes_flat() {
        let h = house("Fish Market");
        let value = serde_json::to_value(RankedLocation::unranked(&h)).unwrap();
        assert_eq!(value["name"], "Fish Market");
        assert!(value.get("distance_km").is_none());
    }
}
