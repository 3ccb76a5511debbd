// crates/housefinder-core/src/index.rs

//! Region and sub-region listings that drive the cascading selectors.
//!
//! Both functions re-derive their result from the catalog on every call.

use crate::model::{Catalog, Location};
use std::collections::BTreeSet;

/// Distinct regions, sorted ascending (case-sensitive byte order).
///
/// Byte order of UTF-8 is Unicode code point order, so names using
/// characters above U+FFFF sort after U+E000..=U+FFFF rather than before
/// them as UTF-16 code unit order would have it.
///
/// ```rust
/// use housefinder_core::{list_regions, Catalog};
///
/// assert_eq!(list_regions(Catalog::embedded()), vec!["Gnaviyani"]);
/// ```
pub fn list_regions(catalog: &Catalog) -> Vec<&str> {
    catalog
        .iter()
        .map(Location::region)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct sub-regions of `region`, sorted ascending in the same code point
/// order as [`list_regions`].
///
/// Empty when `region` is empty or not present in the catalog.
pub fn list_sub_regions<'a>(catalog: &'a Catalog, region: &str) -> Vec<&'a str> {
    if region.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|l| l.region() == region)
        .map(Location::sub_region)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
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
            latitude: 4.17,
            longitude: 73.5,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            loc("Kaafu", "Male", "Jumhooree Maidhaan"),
            loc("Gnaviyani", "Fuvahmulah", "Fish Market"),
            loc("Kaafu", "Hulhumale", "Ferry Terminal"),
            loc("Addu", "Hithadhoo", "Link Road"),
            loc("Kaafu", "Male", "Artificial Beach"),
            loc("kaafu", "Villingili", "Lowercase Region"),
        ])
        .unwrap()
    }

    #[test]
    fn regions_are_sorted_and_unique() {
        assert_eq!(
            list_regions(&catalog()),
            vec!["Addu", "Gnaviyani", "Kaafu", "kaafu"]
        );
    }

    #[test]
    fn sub_regions_belong_to_region() {
        assert_eq!(
            list_sub_regions(&catalog(), "Kaafu"),
            vec!["Hulhumale", "Male"]
        );
    }

    #[test]
    fn region_match_is_case_sensitive() {
        assert_eq!(list_sub_regions(&catalog(), "kaafu"), vec!["Villingili"]);
    }

    #[test]
    fn empty_or_unknown_region_yields_nothing() {
        assert!(list_sub_regions(&catalog(), "").is_empty());
        assert!(list_sub_regions(&catalog(), "Baa").is_empty());
    }

    #[test]
    fn empty_catalog() {
        let empty = Catalog::new(Vec::new()).unwrap();
        assert!(list_regions(&empty).is_empty());
    }

    #[test]
    fn sorts_by_code_point() {
        let catalog = Catalog::new(vec![
            loc("\u{1F334} Palm", "Male", "A"),
            loc("\u{E000} Private", "Male", "B"),
            loc("Addu", "Male", "C"),
        ])
        .unwrap();
        assert_eq!(
            list_regions(&catalog),
            vec!["Addu", "\u{E000} Private", "\u{1F334} Palm"]
        );
    }
}
