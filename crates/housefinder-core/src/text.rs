// crates/housefinder-core/src/text.rs

/// Normalises a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so `"SUNBEAM"` and `"Sunbeam"` fold to the
/// same key. Accents are left alone: name matching is case-insensitive only.
///
/// # Examples
///
/// ```rust
/// use housefinder_core::text::fold_case;
///
/// assert_eq!(fold_case("Fish Market"), "fish market");
/// assert_eq!(fold_case("ÉCOLE"), "école");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_and_unicode_case() {
        assert_eq!(fold_case("SUNBEAM House"), "sunbeam house");
        assert_eq!(fold_case("ÖLAND"), "öland");
    }

    #[test]
    fn keeps_accents() {
        assert_ne!(fold_case("Café"), fold_case("Cafe"));
    }
}
