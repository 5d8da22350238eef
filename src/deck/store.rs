//! Deck composition store: the deck-building rules.
//!
//! `DeckStore` owns the per-card copy counts and the selected faction and
//! is the only place they change. After every operation:
//!
//! - every catalog card has a count (the key set never changes)
//! - no count exceeds `DeckRules::max_copies`
//! - cards outside the selected faction have a count of zero
//!
//! The last rule is kept by `reconcile`, which `select_faction` runs
//! before returning. Reconciliation only ever writes zeros, so running
//! it again is a no-op.

use std::sync::Arc;

use super::change::{Change, Cleared, ClearedCards, Rejection};
use super::composition::DeckComposition;
use crate::cards::{CardCatalog, CardDefinition, CardId};
use crate::core::{DeckRules, Faction, FactionId};
use crate::error::{DeckError, Result};

/// Mutable deck state for one session.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use faction_deck::cards::reference_catalog;
/// use faction_deck::core::DeckRules;
/// use faction_deck::deck::DeckStore;
///
/// let mut store = DeckStore::new(Arc::new(reference_catalog()), DeckRules::default());
///
/// store.increment("Floopie Grunt").unwrap();
/// store.increment("Floopie Grunt").unwrap();
/// assert_eq!(store.current_count("Floopie Grunt"), 2);
///
/// store.select_faction("wizwoz").unwrap();
/// assert_eq!(store.current_count("Floopie Grunt"), 0);
/// ```
#[derive(Clone, Debug)]
pub struct DeckStore {
    catalog: Arc<CardCatalog>,
    rules: DeckRules,
    composition: DeckComposition,
    active: FactionId,
}

impl DeckStore {
    /// Create a store with every count at zero.
    ///
    /// Panics if `rules.initial_faction` isn't one of the catalog's factions.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rules: DeckRules) -> Self {
        let active = initial_faction(&catalog, &rules);
        let composition = DeckComposition::new(catalog.len());

        Self {
            catalog,
            rules,
            composition,
            active,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn composition(&self) -> &DeckComposition {
        &self.composition
    }

    /// The selected faction.
    #[must_use]
    pub fn active_faction(&self) -> FactionId {
        self.active
    }

    /// The selected faction's key and label.
    #[must_use]
    pub fn active_faction_info(&self) -> &Faction {
        self.catalog
            .factions()
            .get(self.active)
            .unwrap_or_else(|| panic!("{} not found in catalog", self.active))
    }

    // === Faction Selection ===

    /// Select a faction by key, then reconcile.
    pub fn select_faction(&mut self, key: &str) -> Result<Change> {
        let faction = self
            .catalog
            .factions()
            .id_of(key)
            .ok_or_else(|| DeckError::UnknownFaction(key.to_string()))?;
        Ok(self.select_faction_id(faction))
    }

    /// Select a faction by ID, then reconcile.
    ///
    /// Panics if the faction isn't one of the catalog's.
    pub fn select_faction_id(&mut self, faction: FactionId) -> Change {
        assert!(
            self.catalog.factions().contains(faction),
            "{faction} not found in catalog"
        );

        let from = std::mem::replace(&mut self.active, faction);
        let cleared = self.reconcile();

        Change::FactionSelected {
            from,
            to: faction,
            cleared,
        }
    }

    /// Zero every held card outside the selected faction.
    ///
    /// Returns the cards zeroed; empty when the deck was already settled.
    pub fn reconcile(&mut self) -> ClearedCards {
        let active = self.active;
        let stale: ClearedCards = self
            .composition
            .held()
            .filter(|&(card, _)| !self.catalog.card(card).is_in(active))
            .map(|(card, previous)| Cleared { card, previous })
            .collect();

        for cleared in &stale {
            self.composition.set(cleared.card, 0);
        }
        stale
    }

    /// Whether no card outside the selected faction is held.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.composition
            .held()
            .all(|(card, _)| self.catalog.card(card).is_in(self.active))
    }

    // === Deck Edits ===

    /// Add one copy of a card by name.
    pub fn increment(&mut self, name: &str) -> Result<Change> {
        let card = self.resolve(name)?;
        Ok(self.increment_id(card))
    }

    /// Add one copy of a card.
    ///
    /// Rejected when the card is outside the selected faction or already
    /// at the copy limit.
    pub fn increment_id(&mut self, card: CardId) -> Change {
        let count = self.composition.get(card);

        if !self.is_selectable(card) {
            return Change::Rejected {
                card,
                reason: Rejection::NotSelectable,
            };
        }
        if count >= self.rules.max_copies {
            return Change::Rejected {
                card,
                reason: Rejection::AtLimit,
            };
        }

        self.composition.set(card, count + 1);
        Change::Added {
            card,
            count: count + 1,
        }
    }

    /// Remove one copy of a card by name.
    pub fn decrement(&mut self, name: &str) -> Result<Change> {
        let card = self.resolve(name)?;
        Ok(self.decrement_id(card))
    }

    /// Remove one copy of a card.
    ///
    /// Allowed for any held card, whatever its faction.
    pub fn decrement_id(&mut self, card: CardId) -> Change {
        let count = self.composition.get(card);

        if count == 0 {
            return Change::Rejected {
                card,
                reason: Rejection::NoCopies,
            };
        }

        self.composition.set(card, count - 1);
        Change::Removed {
            card,
            count: count - 1,
        }
    }

    /// Reset every count to zero and reselect the initial faction.
    pub fn reset(&mut self) {
        self.composition.clear();
        self.active = initial_faction(&self.catalog, &self.rules);
    }

    // === Queries ===

    /// Copy count by name. Names not in the catalog count as zero.
    #[must_use]
    pub fn current_count(&self, name: &str) -> u8 {
        self.catalog
            .id_of(name)
            .map_or(0, |card| self.composition.get(card))
    }

    /// Copy count of a card.
    #[must_use]
    pub fn count(&self, card: CardId) -> u8 {
        self.composition.get(card)
    }

    /// Whether the card belongs to the selected faction.
    #[must_use]
    pub fn is_selectable(&self, card: CardId) -> bool {
        self.catalog
            .is_selectable(self.catalog.card(card), self.active)
    }

    /// Whether `increment_id` would be accepted.
    #[must_use]
    pub fn can_add(&self, card: CardId) -> bool {
        self.is_selectable(card) && self.count(card) < self.rules.max_copies
    }

    /// Whether `decrement_id` would be accepted.
    #[must_use]
    pub fn can_remove(&self, card: CardId) -> bool {
        self.count(card) > 0
    }

    /// Held cards as (name, count), in catalog order.
    #[must_use]
    pub fn non_zero_entries(&self) -> Vec<(&str, u8)> {
        self.held_cards()
            .map(|(card, count)| (card.name.as_str(), count))
            .collect()
    }

    /// Held cards with their definitions, in catalog order.
    pub fn held_cards(&self) -> impl Iterator<Item = (&CardDefinition, u8)> {
        self.composition
            .held()
            .map(|(card, count)| (self.catalog.card(card), count))
    }

    /// Total copies across all cards.
    #[must_use]
    pub fn total_copies(&self) -> u32 {
        self.composition.total()
    }

    fn resolve(&self, name: &str) -> Result<CardId> {
        self.catalog
            .id_of(name)
            .ok_or_else(|| DeckError::UnknownCard(name.to_string()))
    }
}

fn initial_faction(catalog: &CardCatalog, rules: &DeckRules) -> FactionId {
    match rules.initial_faction {
        Some(faction) => {
            assert!(
                catalog.factions().contains(faction),
                "Initial {faction} not found in catalog"
            );
            faction
        }
        None => catalog
            .factions()
            .first()
            .expect("catalog defines at least one faction"),
    }
}
