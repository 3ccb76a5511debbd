// crates/housefinder-core/src/traits.rs
use crate::model::{Coordinates, Location};
use crate::text::fold_case;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive helpers:
/// - [`NameMatch::is_named`]: equality on the folded form
/// - [`NameMatch::name_contains_folded`]: substring match against a
///   needle the caller has already folded with [`fold_case`]
///
/// # Examples
/// ```rust
/// use housefinder_core::text::fold_case;
/// use housefinder_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Fish Market").is_named("FISH MARKET"));
/// assert!(Place("Sunbeam House").name_contains_folded(&fold_case("SUNBEAM")));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_case(self.name_str()) == fold_case(q)
    }

    /// Substring match of an already folded needle against the folded name.
    ///
    /// Fold the needle once per query, not once per record.
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        fold_case(self.name_str()).contains(folded)
    }
}

/// Anything that sits at a single point on the map.
pub trait Positioned {
    fn coordinates(&self) -> Coordinates;
}

impl NameMatch for Location {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl Positioned for Location {
    #[inline]
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
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
            address: String::new(),
            latitude: -0.3087,
            longitude: 73.4401,
        }
    }

    #[test]
    fn folded_needle_matches_any_case() {
        let h = house("Sunbeam House");
        assert!(h.name_contains_folded(&fold_case("BEAM HO")));
        assert!(h.name_contains_folded(""));
        assert!(!h.name_contains_folded(&fold_case("moon")));
    }

    #[test]
    fn is_named_needs_whole_name() {
        let h = house("Slip Way");
        assert!(h.is_named("SLIP WAY"));
        assert!(!h.is_named("slip"));
    }

    #[test]
    fn location_position() {
        assert_eq!(house("A").coordinates(), Coordinates::new(-0.3087, 73.4401));
    }
}
