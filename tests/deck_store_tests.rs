//! Deck store scenario tests.
//!
//! These walk the reference catalog through the everyday builder flows:
//! - Filling a card up to the copy limit
//! - Switching factions with cards in the deck
//! - Removing cards that aren't there
//! - Reading back the deck list

use std::sync::Arc;

use faction_deck::cards::reference_catalog;
use faction_deck::core::DeckRules;
use faction_deck::deck::{Change, DeckStore, Rejection};

fn new_store() -> DeckStore {
    DeckStore::new(Arc::new(reference_catalog()), DeckRules::default())
}

/// Three copies fit, the fourth is ignored.
#[test]
fn test_fill_to_copy_limit() {
    let mut store = new_store();
    assert_eq!(store.active_faction_info().key, "floopies");

    for _ in 0..3 {
        assert!(store.increment("Floopie Grunt").unwrap().is_applied());
    }
    assert_eq!(store.current_count("Floopie Grunt"), 3);

    let fourth = store.increment("Floopie Grunt").unwrap();
    assert_eq!(fourth.rejection(), Some(Rejection::AtLimit));
    assert_eq!(store.current_count("Floopie Grunt"), 3);
}

/// Switching away from a faction empties its cards and locks them out.
#[test]
fn test_switch_faction_clears_and_locks() {
    let mut store = new_store();
    store.increment("Floopie Grunt").unwrap();
    store.increment("Floopie Grunt").unwrap();

    store.select_faction("wizwoz").unwrap();
    assert_eq!(store.current_count("Floopie Grunt"), 0);

    let change = store.increment("Floopie Grunt").unwrap();
    assert_eq!(change.rejection(), Some(Rejection::NotSelectable));
    assert_eq!(store.current_count("Floopie Grunt"), 0);
}

/// Removing from zero is ignored.
#[test]
fn test_remove_from_empty() {
    let mut store = new_store();

    let change = store.decrement("Floopie Grunt").unwrap();

    assert_eq!(change.rejection(), Some(Rejection::NoCopies));
    assert_eq!(store.current_count("Floopie Grunt"), 0);
}

/// The deck list follows catalog order, not the order cards were added.
#[test]
fn test_non_zero_entries_order() {
    let mut store = new_store();
    store.increment("Mega Floopie").unwrap();
    store.increment("Floopie Grunt").unwrap();
    store.increment("Floopie Grunt").unwrap();

    assert_eq!(
        store.non_zero_entries(),
        vec![("Floopie Grunt", 2), ("Mega Floopie", 1)]
    );
}

/// Selecting the same faction twice is the same as once.
#[test]
fn test_repeat_selection() {
    let mut once = new_store();
    let mut twice = new_store();

    for store in [&mut once, &mut twice] {
        store.increment("Floopie Elder").unwrap();
        store.select_faction("gazimbotron").unwrap();
        store.increment("Gazimbot Scout").unwrap();
    }

    once.select_faction("gazimbotron").unwrap();
    twice.select_faction("gazimbotron").unwrap();
    let second = twice.select_faction("gazimbotron").unwrap();

    match second {
        Change::FactionSelected { from, to, cleared } => {
            assert_eq!(from, to);
            assert!(cleared.is_empty());
        }
        other => panic!("expected FactionSelected, got {other:?}"),
    }
    assert_eq!(once.composition(), twice.composition());
    assert_eq!(once.active_faction(), twice.active_faction());
}

/// Add then remove returns to the starting count.
#[test]
fn test_add_remove_symmetry() {
    let mut store = new_store();

    for start in 0..3u8 {
        assert_eq!(store.current_count("Sneaky Floopie"), start);
        store.increment("Sneaky Floopie").unwrap();
        store.decrement("Sneaky Floopie").unwrap();
        assert_eq!(store.current_count("Sneaky Floopie"), start);
        store.increment("Sneaky Floopie").unwrap();
    }
}

/// A full round trip through all three factions.
#[test]
fn test_faction_round_trip() {
    let mut store = new_store();

    store.increment("Floopie Captain").unwrap();
    store.select_faction("wizwoz").unwrap();
    store.increment("Grand Wizwoz").unwrap();
    store.increment("Dark Wizwoz").unwrap();
    assert_eq!(store.total_copies(), 2);

    store.select_faction("gazimbotron").unwrap();
    assert_eq!(store.total_copies(), 0);

    store.select_faction("floopies").unwrap();
    assert_eq!(store.current_count("Floopie Captain"), 0);
    assert!(store.is_settled());
}
