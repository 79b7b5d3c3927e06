//! Browser root state and reducer.
//!
//! `BrowserState` is the single source of truth: one `FilterState`, one
//! derived visible set and one reveal window. Every control adapter in
//! the shell dispatches an `Action`; the reducer mutates the filter
//! state, recomputes the visible set and reports any side effect the
//! shell should perform. Redundant control views re-render from the
//! `ControlSync` snapshot, so they can never disagree.

use crate::catalog::CatalogStore;
use crate::model::Offer;
use crate::state::engine::visible_offers;
use crate::state::filter::{canonical_location, FilterState, SortMode, LOCATION_ALL};
use crate::state::reveal::RevealWindow;
use tracing::debug;

/// Everything a control adapter can do to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search box keystroke; raw text, normalized by the reducer.
    SetSearch(String),
    /// Exclusive category selection; `None` clears it.
    SetCategory(Option<String>),
    /// Sort chip or dropdown selection.
    SetSort(SortMode),
    /// Location chip or dropdown selection; control-side key, mapped
    /// through `canonical_location`.
    SetLocation(String),
    /// "Clear all": reset every filter axis to its default.
    ClearAll,
    /// "Show more": grow the reveal window. Does not recompute.
    ShowMore,
}

/// Side effect the shell must perform after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Scroll the results list back into view (category selection).
    ScrollToResults,
}

/// Root browser state.
#[derive(Debug)]
pub struct BrowserState {
    /// Loaded catalog data; immutable after construction.
    store: CatalogStore,

    /// Canonical filter state. Mutated only through `apply`.
    filter: FilterState,

    /// Derived ordered subset as indices into the catalog.
    visible: Vec<usize>,

    /// Reveal window over `visible`.
    reveal: RevealWindow,
}

impl BrowserState {
    /// Create browser state over a loaded store, with the default filter
    /// already applied (full catalog, discount-descending, reveal 3).
    pub fn new(store: CatalogStore) -> Self {
        let mut state = Self {
            store,
            filter: FilterState::default(),
            visible: Vec::new(),
            reveal: RevealWindow::new(),
        };
        state.recompute();
        state
    }

    /// Apply an action, returning the side effect for the shell.
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::SetSearch(raw) => {
                self.filter.set_search(&raw);
                self.recompute();
                Effect::None
            }
            Action::SetCategory(category) => {
                self.filter.category = category;
                self.recompute();
                Effect::ScrollToResults
            }
            Action::SetSort(sort) => {
                self.filter.sort = sort;
                self.recompute();
                Effect::None
            }
            Action::SetLocation(key) => {
                self.filter.location = canonical_location(&key).to_string();
                self.recompute();
                Effect::None
            }
            Action::ClearAll => {
                self.filter = FilterState::default();
                self.recompute();
                Effect::None
            }
            Action::ShowMore => {
                self.reveal.advance();
                Effect::None
            }
        }
    }

    /// Re-derive the visible set from the current filter state and reset
    /// the reveal window.
    fn recompute(&mut self) {
        self.visible = visible_offers(self.store.offers(), &self.filter);
        self.reveal.reset();
        debug!(
            visible = self.visible.len(),
            location = %self.filter.location,
            sort = ?self.filter.sort,
            "Recomputed visible set"
        );
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Ordered visible subset, full length (ignores the reveal window).
    pub fn visible(&self) -> impl Iterator<Item = &Offer> + '_ {
        self.visible.iter().map(|&i| &self.store.offers()[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The revealed slice of the visible subset, in display order.
    pub fn shown(&self) -> impl Iterator<Item = &Offer> + '_ {
        let n = self.reveal.shown(self.visible.len());
        self.visible[..n].iter().map(|&i| &self.store.offers()[i])
    }

    pub fn shown_len(&self) -> usize {
        self.reveal.shown(self.visible.len())
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal.count()
    }

    /// Whether the "show more" affordance should be offered.
    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.visible.len())
    }

    /// Snapshot for rendering every redundant control view.
    pub fn control_sync(&self) -> ControlSync {
        ControlSync {
            search_text: self.filter.search_term.clone(),
            category: self.filter.category.clone(),
            sort: self.filter.sort,
            location: self.filter.location.clone(),
            all_chip_active: self.filter.is_default(),
        }
    }
}

// ===== ControlSync =====

/// Derived view of the filter state for the control widgets.
///
/// Chips, dropdown labels and the search box all render from this one
/// snapshot after every action; no control keeps private selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSync {
    pub search_text: String,
    pub category: Option<String>,
    pub sort: SortMode,
    pub location: String,
    /// The "all offers" chip is active only in the cleared default state.
    pub all_chip_active: bool,
}

impl ControlSync {
    /// Label for the location dropdown button.
    pub fn location_label(&self) -> &str {
        if self.location == LOCATION_ALL {
            "Məkan"
        } else {
            &self.location
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
