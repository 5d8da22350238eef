//! Per-card copy counts.
//!
//! `DeckComposition` holds one count per catalog card, indexed by `CardId`.
//! The key set is fixed at construction: every card has an entry from the
//! start and entries are never added or removed, only overwritten.
//!
//! Backed by `im::Vector` so sessions can snapshot a deck in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Copy counts for every card in a catalog.
///
/// This type does no rule checking; `DeckStore` owns the rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    counts: Vector<u8>,
}

impl DeckComposition {
    /// Create a composition for `card_count` cards, all at zero.
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            counts: Vector::from(vec![0; card_count]),
        }
    }

    /// Copy count for a card.
    ///
    /// Panics if the ID is out of range for this composition.
    #[must_use]
    pub fn get(&self, card: CardId) -> u8 {
        self.counts[card.index()]
    }

    /// Overwrite a card's copy count.
    pub fn set(&mut self, card: CardId, count: u8) {
        self.counts[card.index()] = count;
    }

    /// Number of entries (equal to the catalog size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all copy counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Iterate over (CardId, count) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (CardId(i as u16), c))
    }

    /// Iterate over held cards only, in catalog order.
    pub fn held(&self) -> impl Iterator<Item = (CardId, u8)> + '_ {
        self.iter().filter(|&(_, c)| c > 0)
    }

    /// Set every count back to zero, keeping all entries.
    pub fn clear(&mut self) {
        for count in self.counts.iter_mut() {
            *count = 0;
        }
    }
}
