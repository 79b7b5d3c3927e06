//! Acceptance scenarios for the browser state machine.
//!
//! Each test drives the reducer the way the shell would and checks the
//! externally visible outcome: which offers show, in what order, and
//! how many are revealed.

use endirim::catalog::CatalogStore;
use endirim::model::Offer;
use endirim::state::{Action, BrowserState, Effect, SortMode};

// ===== Fixtures =====

fn offer(id: &str, title: &str, category: &str, location: &str, discount: &str, rating: &str) -> Offer {
    serde_json::from_str(&format!(
        r#"{{
            "id": "{id}",
            "title": "{title}",
            "category": "{category}",
            "location": "{location}",
            "discount_amount": "{discount}",
            "rating": "{rating}"
        }}"#
    ))
    .expect("valid offer fixture")
}

fn catalog() -> Vec<Offer> {
    vec![
        offer("a", "Offer A", "kofe", "nizami", "20%", "4.8"),
        offer("b", "Offer B", "kofe", "Nəsimi mts.", "50%", "3.1"),
        offer("c", "Offer C", "kitab", "28 may", "35%", "4.2"),
        offer("d", "Offer D", "idman", "Sahil mts.", "10%", "4.9"),
    ]
}

fn browser() -> BrowserState {
    BrowserState::new(CatalogStore::new(catalog(), Vec::new()))
}

fn shown_ids(state: &BrowserState) -> Vec<String> {
    state.shown().map(|o| o.id.to_string()).collect()
}

fn visible_ids(state: &BrowserState) -> Vec<String> {
    state.visible().map(|o| o.id.to_string()).collect()
}

// ===== Scenario: default ordering =====

#[test]
fn higher_discount_shows_before_lower_regardless_of_catalog_order() {
    // GIVEN: offer A (20%) appears before offer B (50%) in the catalog
    // WHEN: the browser opens with no filters
    let state = browser();

    // THEN: B renders before A
    let ids = visible_ids(&state);
    let pos_a = ids.iter().position(|i| i == "a").unwrap();
    let pos_b = ids.iter().position(|i| i == "b").unwrap();
    assert!(pos_b < pos_a, "50% must come before 20%");
    assert_eq!(ids, vec!["b", "c", "a", "d"]);
}

// ===== Scenario: show more =====

#[test]
fn show_more_reveals_six_more_and_caps_at_the_visible_count() {
    // GIVEN: ten offers match the current filters
    let offers: Vec<Offer> = (0..10)
        .map(|i| offer(&i.to_string(), "T", "kofe", "nizami", &format!("{}%", i + 1), "4"))
        .collect();
    let mut state = BrowserState::new(CatalogStore::new(offers, Vec::new()));
    assert_eq!(shown_ids(&state).len(), 3);
    assert!(state.has_more());

    // WHEN: the user presses "show more" once
    state.apply(Action::ShowMore);

    // THEN: nine offers show and the affordance remains
    assert_eq!(shown_ids(&state).len(), 9);
    assert!(state.has_more());

    // WHEN: pressed again
    state.apply(Action::ShowMore);

    // THEN: the count caps at ten and the affordance disappears
    assert_eq!(shown_ids(&state).len(), 10);
    assert!(!state.has_more());
}

#[test]
fn changing_a_filter_resets_the_reveal_window() {
    let offers: Vec<Offer> = (0..10)
        .map(|i| offer(&i.to_string(), "T", "kofe", "nizami", "5%", "4"))
        .collect();
    let mut state = BrowserState::new(CatalogStore::new(offers, Vec::new()));
    state.apply(Action::ShowMore);
    assert_eq!(shown_ids(&state).len(), 9);

    state.apply(Action::SetSort(SortMode::HighestRating));
    assert_eq!(shown_ids(&state).len(), 3, "Recompute resets reveal to 3");
}

// ===== Scenario: clear all =====

#[test]
fn clear_all_restores_the_full_default_view() {
    // GIVEN: several filters are active and "show more" was pressed
    let mut state = browser();
    state.apply(Action::SetSearch("offer".to_string()));
    state.apply(Action::SetCategory(Some("kofe".to_string())));
    state.apply(Action::SetSort(SortMode::HighestRating));
    state.apply(Action::SetLocation("nizami".to_string()));
    state.apply(Action::ShowMore);
    assert!(visible_ids(&state).len() < 4);

    // WHEN: the user clears all filters
    state.apply(Action::ClearAll);

    // THEN: the full catalog is visible, discount-descending, reveal at 3
    assert!(state.filter().is_default());
    assert_eq!(visible_ids(&state), vec!["b", "c", "a", "d"]);
    assert_eq!(state.reveal_count(), 3);
    assert!(state.control_sync().all_chip_active);
}

// ===== Scenario: location fallback =====

#[test]
fn canonical_key_matches_suffixed_catalog_location() {
    // GIVEN: offer B is located at "Nəsimi mts."
    let mut state = browser();

    // WHEN: the user picks the "nasimi" dropdown entry
    state.apply(Action::SetLocation("nasimi".to_string()));

    // THEN: offer B matches through the "mts"-stripping fallback
    assert_eq!(visible_ids(&state), vec!["b"]);
}

#[test]
fn location_and_category_filters_compose() {
    let mut state = browser();
    state.apply(Action::SetLocation("nasimi".to_string()));
    state.apply(Action::SetCategory(Some("kitab".to_string())));
    assert!(visible_ids(&state).is_empty(), "No kitab offer in Nəsimi");

    state.apply(Action::SetCategory(Some("kofe".to_string())));
    assert_eq!(visible_ids(&state), vec!["b"]);
}

// ===== Scenario: search =====

#[test]
fn search_matches_title_case_insensitively() {
    let mut state = browser();
    state.apply(Action::SetSearch("OFFER C".to_string()));
    assert_eq!(visible_ids(&state), vec!["c"]);
}

#[test]
fn search_with_no_matches_shows_nothing_gracefully() {
    let mut state = browser();
    state.apply(Action::SetSearch("zzz".to_string()));
    assert!(visible_ids(&state).is_empty());
    assert_eq!(state.shown_len(), 0);
    assert!(!state.has_more());
}

// ===== Scenario: category selection effect =====

#[test]
fn category_selection_requests_a_scroll_to_results() {
    let mut state = browser();
    let effect = state.apply(Action::SetCategory(Some("kofe".to_string())));
    assert_eq!(effect, Effect::ScrollToResults);
    assert_eq!(visible_ids(&state), vec!["b", "a"]);

    // Other actions carry no effect
    let effect = state.apply(Action::SetSort(SortMode::HighestRating));
    assert_eq!(effect, Effect::None);
}

// ===== Scenario: rating sort =====

#[test]
fn rating_sort_reorders_without_changing_membership() {
    let mut state = browser();
    state.apply(Action::SetSort(SortMode::HighestRating));
    assert_eq!(visible_ids(&state), vec!["d", "a", "c", "b"]);
}
