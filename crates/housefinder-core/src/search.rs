// crates/housefinder-core/src/search.rs

//! The query engine: cascading filters over the catalog, then a fixed cap.

use crate::model::{Catalog, Criteria, Location};
use crate::text::fold_case;
use crate::traits::NameMatch;
use tracing::debug;

/// Upper bound on the number of locations a single search returns.
pub const MAX_RESULTS: usize = 10;

/// Runs `criteria` against `catalog` and returns at most [`MAX_RESULTS`]
/// locations in catalog order.
///
/// Filters apply in a fixed order; an empty field skips its filter:
///
/// 1. `region` — exact match on [`Location::region`].
/// 2. `sub_region` — exact match on [`Location::sub_region`]. This does not
///    check that the sub-region belongs to the chosen region; callers only
///    offer sub-regions from [`crate::list_sub_regions`].
/// 3. `name` — trimmed, then a case-insensitive substring of
///    [`Location::name`].
/// 4. Truncate to the first [`MAX_RESULTS`] survivors.
///
/// No match is an empty vector, not an error.
///
/// # Examples
///
/// ```rust
/// use housefinder_core::{search, Catalog, Criteria};
///
/// let catalog = Catalog::embedded();
///
/// let all = search(catalog, &Criteria::default());
/// assert_eq!(all.len(), 10);
///
/// let fish = search(catalog, &Criteria::default().name("  FISH "));
/// assert_eq!(fish[0].name(), "Fish Market");
///
/// assert!(search(catalog, &Criteria::default().region("Male")).is_empty());
/// ```
pub fn search<'a>(catalog: &'a Catalog, criteria: &Criteria) -> Vec<&'a Location> {
    let region = criteria.region.as_str();
    let sub_region = criteria.sub_region.as_str();
    let needle = fold_case(criteria.name.trim());

    let hits: Vec<&Location> = catalog
        .iter()
        .filter(|l| region.is_empty() || l.region() == region)
        .filter(|l| sub_region.is_empty() || l.sub_region() == sub_region)
        .filter(|l| needle.is_empty() || l.name_contains_folded(&needle))
        .take(MAX_RESULTS)
        .collect();

    debug!(
        region,
        sub_region,
        name = needle.as_str(),
        hits = hits.len(),
        "search"
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(region: &str, sub_region: &str, name: &str) -> Location {
        Location {
            region: region.into(),
            sub_region: sub_region.into(),
            name: name.into(),
            address: String::new(),
            latitude: 0.0,
            longitude: 73.0,
        }
    }

    fn names<'a>(hits: &[&'a Location]) -> Vec<&'a str> {
        hits.iter().map(|l| l.name()).collect()
    }

    fn mixed() -> Catalog {
        Catalog::new(vec![
            loc("Kaafu", "Male", "Sunbeam House"),
            loc("Gnaviyani", "Fuvahmulah", "Fish Market"),
            loc("Kaafu", "Hulhumale", "Moonlight"),
            loc("Addu", "Male", "Sunset Villa"),
            loc("Kaafu", "Male", "Blue Sun"),
        ])
        .unwrap()
    }

    #[test]
    fn region_filter_is_exact() {
        let c = mixed();
        assert_eq!(
            names(&search(&c, &Criteria::default().region("Kaafu"))),
            vec!["Sunbeam House", "Moonlight", "Blue Sun"]
        );
        assert!(search(&c, &Criteria::default().region("kaafu")).is_empty());
    }

    #[test]
    fn sub_region_filter_ignores_region() {
        let c = mixed();
        assert_eq!(
            names(&search(&c, &Criteria::default().sub_region("Male"))),
            vec!["Sunbeam House", "Sunset Villa", "Blue Sun"]
        );
    }

    #[test]
    fn filters_cascade() {
        let c = mixed();
        let criteria = Criteria::default()
            .region("Kaafu")
            .sub_region("Male")
            .name("sun");
        assert_eq!(
            names(&search(&c, &criteria)),
            vec!["Sunbeam House", "Blue Sun"]
        );
    }

    #[test]
    fn name_is_trimmed_and_case_insensitive() {
        let c = mixed();
        assert_eq!(
            names(&search(&c, &Criteria::default().name("  SUNBEAM "))),
            vec!["Sunbeam House"]
        );
    }

    #[test]
    fn whitespace_name_is_no_constraint() {
        let c = mixed();
        assert_eq!(search(&c, &Criteria::default().name("   ")).len(), 5);
    }

    #[test]
    fn inner_whitespace_is_significant() {
        let c = mixed();
        assert!(search(&c, &Criteria::default().name("sun beam")).is_empty());
    }

    #[test]
    fn caps_at_max_results_in_catalog_order() {
        let many: Vec<Location> = (0..25)
            .map(|i| loc("Kaafu", "Male", &format!("House {i:02}")))
            .collect();
        let c = Catalog::new(many).unwrap();

        let hits = search(&c, &Criteria::default().name("house"));
        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[0].name(), "House 00");
        assert_eq!(hits[9].name(), "House 09");
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let c = Catalog::new(Vec::new()).unwrap();
        assert!(search(&c, &Criteria::default()).is_empty());
    }
}
