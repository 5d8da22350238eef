//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog entry.
//! Only `name` and `faction` carry deck-building meaning; the text and
//! stats are display data.
//!
//! How many copies of a card are in the deck is stored separately in
//! `DeckComposition`.

use serde::{Deserialize, Serialize};

use crate::core::FactionId;

/// Identifier for a card definition: its position in catalog order.
///
/// Only a `CardCatalog` hands these out, so an ID is always valid for
/// the catalog that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use faction_deck::cards::{CardDefinition, CardId};
/// use faction_deck::core::FactionId;
///
/// let grunt = CardDefinition::new(CardId::new(0), "Floopie Grunt", FactionId::new(0))
///     .with_text("Just a grunt.")
///     .with_stats(1, 2);
///
/// assert_eq!(grunt.atk, 1);
/// assert_eq!(grunt.def, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Position in catalog order.
    pub id: CardId,

    /// Card name, unique within a catalog.
    pub name: String,

    /// Owning faction. Decides whether the card may be added to a deck.
    pub faction: FactionId,

    /// Rules text (display only).
    pub main_text: String,

    /// Attack (display only).
    pub atk: u32,

    /// Defense (display only).
    pub def: u32,
}

impl CardDefinition {
    /// Create a new card definition with empty text and zero stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, faction: FactionId) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            main_text: String::new(),
            atk: 0,
            def: 0,
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.main_text = text.into();
        self
    }

    /// Set attack and defense (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, atk: u32, def: u32) -> Self {
        self.atk = atk;
        self.def = def;
        self
    }

    /// Whether this card belongs to `faction`.
    #[must_use]
    pub fn is_in(&self, faction: FactionId) -> bool {
        self.faction == faction
    }
}
