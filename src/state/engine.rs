//! Filter/sort engine (pure).
//!
//! Maps the full catalog plus a `FilterState` to an ordered list of
//! catalog indices. Three independent predicates (category, free-text
//! search, location) are applied in sequence, then the survivors are
//! stable-sorted by the active sort mode.

use crate::model::Offer;
use crate::state::filter::{FilterState, SortMode, LOCATION_ALL};
use std::cmp::Ordering;

/// Compute the visible subset as indices into `offers`, ordered.
pub fn visible_offers(offers: &[Offer], filter: &FilterState) -> Vec<usize> {
    let mut visible: Vec<usize> = offers
        .iter()
        .enumerate()
        .filter(|(_, offer)| {
            matches_category(offer, filter)
                && matches_search(offer, filter)
                && matches_location(offer, filter)
        })
        .map(|(i, _)| i)
        .collect();

    let key = |offer: &Offer| match filter.sort {
        SortMode::HighestDiscount => offer.discount_percent(),
        SortMode::HighestRating => offer.rating_value(),
    };

    // Stable descending sort; unparseable values order after everything.
    visible.sort_by(|&a, &b| descending(key(&offers[a]), key(&offers[b])));
    visible
}

/// Descending order on optional keys, `None` last, equal values stable.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keep iff no category is selected or the category matches exactly.
fn matches_category(offer: &Offer, filter: &FilterState) -> bool {
    filter
        .category
        .as_deref()
        .is_none_or(|category| offer.category == category)
}

/// Keep iff the term is empty or is a case-insensitive substring of the
/// title, location, or any keyword.
fn matches_search(offer: &Offer, filter: &FilterState) -> bool {
    let term = filter.search_term.as_str();
    if term.is_empty() {
        return true;
    }
    offer.title.to_lowercase().contains(term)
        || offer.location.to_lowercase().contains(term)
        || offer
            .keywords
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|k| k.to_lowercase().contains(term))
}

/// Keep iff the filter location is "all" or the offer location contains
/// the filter location in one of three spellings: as-is, with the literal
/// "mts" removed, or with "." removed. The fallbacks let free-text
/// locations like "Nəsimi mts." match canonical keys like "nəsimi".
fn matches_location(offer: &Offer, filter: &FilterState) -> bool {
    if filter.location == LOCATION_ALL {
        return true;
    }
    let location = offer.location.to_lowercase();
    let wanted = filter.location.to_lowercase();

    location.contains(&wanted)
        || location.contains(wanted.replace("mts", "").trim())
        || location.contains(wanted.replace('.', "").trim())
}

// ===== Tests =====

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
