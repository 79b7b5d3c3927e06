//! Filter state: the single source of truth behind every control view.
//!
//! Redundant UI controls (search box, category list, chips, dropdowns)
//! never hold their own state; they all mutate this record through the
//! reducer and re-render from it afterwards.

/// Sort mode for the visible set.
///
/// There is deliberately no "unsorted" variant: the visible set is always
/// ordered, discount-descending unless the user picks rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending by parsed discount percentage.
    #[default]
    HighestDiscount,
    /// Descending by parsed rating.
    HighestRating,
}

impl SortMode {
    /// Label shown on chips and dropdown buttons.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::HighestDiscount => "Ən yüksək endirim",
            SortMode::HighestRating => "Ən yüksək reytinq",
        }
    }
}

/// Canonical filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search term, lowercased and trimmed at the boundary.
    pub search_term: String,

    /// Exclusive category selection; `None` means all categories.
    /// Matched case-sensitively against `Offer::category`.
    pub category: Option<String>,

    /// Sort mode, always applied.
    pub sort: SortMode,

    /// Location filter key; "all" disables the location predicate.
    pub location: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            sort: SortMode::default(),
            location: LOCATION_ALL.to_string(),
        }
    }
}

/// Sentinel location value meaning "no location filter".
pub const LOCATION_ALL: &str = "all";

impl FilterState {
    /// Normalize and store a raw search string.
    pub fn set_search(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
    }

    /// Whether this equals the cleared default, which is when the
    /// "all offers" chip renders as active.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Map a control-side location key to the catalog's location spelling.
///
/// Dropdowns use ASCII-ish keys ("nasimi") while the catalog stores the
/// native strings ("nəsimi", "Gənclik mts."). Unknown keys pass through
/// unchanged so free-form values still filter.
pub fn canonical_location(key: &str) -> &str {
    match key {
        "nizami" => "nizami",
        "28-may" => "28 may",
        "nasimi" | "nəsimi" => "nəsimi",
        "narimanov" => "nərimanov",
        "inşaatçılar" => "İnşaatçılar mts.",
        "əhmədli" => "Əhmədli mts.",
        "gənclik" => "Gənclik mts.",
        "içərişəhər" => "İçərişəhər mts.",
        "sahil" => "Sahil mts.",
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_highest_discount() {
        assert_eq!(SortMode::default(), SortMode::HighestDiscount);
    }

    #[test]
    fn default_state_has_all_location_and_no_category() {
        let state = FilterState::default();
        assert_eq!(state.location, LOCATION_ALL);
        assert_eq!(state.category, None);
        assert!(state.search_term.is_empty());
        assert!(state.is_default());
    }

    #[test]
    fn set_search_trims_and_lowercases() {
        let mut state = FilterState::default();
        state.set_search("  Coffee Lab ");
        assert_eq!(state.search_term, "coffee lab");
    }

    #[test]
    fn mutated_state_is_not_default() {
        let mut state = FilterState::default();
        state.sort = SortMode::HighestRating;
        assert!(!state.is_default());
    }

    #[test]
    fn canonical_location_maps_ascii_keys() {
        assert_eq!(canonical_location("nasimi"), "nəsimi");
        assert_eq!(canonical_location("28-may"), "28 may");
        assert_eq!(canonical_location("gənclik"), "Gənclik mts.");
    }

    #[test]
    fn canonical_location_passes_unknown_keys_through() {
        assert_eq!(canonical_location("xətai"), "xətai");
        assert_eq!(canonical_location("all"), "all");
    }
}
